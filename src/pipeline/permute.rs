use rand::rngs::StdRng;
use rand::{seq::SliceRandom, SeedableRng};
use sha2::{Digest, Sha256};

/// Bytes per pixel: the pipeline always works on RGBA data
pub const PIXEL_BYTES: usize = 4;

/// Domain separator for the shuffle seed
/// Keeps the permutation seed distinct from the keystream seed for every
/// password. Format constant: changing it (or the RNG below) breaks
/// compatibility with previously shuffled images.
const SHUFFLE_DOMAIN: &[u8] = b"pixelveil_shuffle_v1";

/// Derive the 32-byte shuffle seed from a password
fn derive_shuffle_seed(password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(SHUFFLE_DOMAIN);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

/// Derive the pixel permutation for an image of `size` pixels
/// Fisher-Yates over [0, size) driven by a seeded StdRng, fully
/// determined by the password. `perm[i]` is the source index whose pixel
/// lands at destination index i.
pub fn derive_permutation(password: &str, size: usize) -> Vec<usize> {
    let mut permutation: Vec<usize> = (0..size).collect();
    if size < 2 {
        // Identity; no randomness drawn
        return permutation;
    }

    let mut rng = StdRng::from_seed(derive_shuffle_seed(password));
    permutation.shuffle(&mut rng);
    permutation
}

/// Invert a permutation: inv[perm[i]] = i for all i
pub fn invert_permutation(permutation: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0usize; permutation.len()];
    for (dest, &src) in permutation.iter().enumerate() {
        inverse[src] = dest;
    }
    inverse
}

/// Reorder whole RGBA pixels according to a permutation
/// Destination pixel i is copied from source pixel `permutation[i]`.
/// The buffer must hold exactly `permutation.len()` pixels; callers
/// validate dimensions at the pipeline boundary.
pub fn apply_pixel_permutation(buffer: &[u8], permutation: &[usize]) -> Vec<u8> {
    assert_eq!(buffer.len(), permutation.len() * PIXEL_BYTES);

    let mut out = vec![0u8; buffer.len()];
    for (dest, &src) in permutation.iter().enumerate() {
        let d = dest * PIXEL_BYTES;
        let s = src * PIXEL_BYTES;
        out[d..d + PIXEL_BYTES].copy_from_slice(&buffer[s..s + PIXEL_BYTES]);
    }
    out
}
