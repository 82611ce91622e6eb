use sha2::{Digest, Sha256};

/// Derive the 32-byte seed from a password
/// Plain SHA-256 of the UTF-8 bytes, no salt: identical password must
/// produce an identical seed across processes and platforms
pub fn derive_seed(password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

/// Generate a deterministic keystream of exactly `length` bytes
/// Counter mode over the seed: block_i = SHA-256(seed || i as u64 LE),
/// blocks concatenated and truncated. Byte i depends only on (seed, i),
/// so the stream for a shorter length is always a prefix of the stream
/// for a longer one.
///
/// An empty password is accepted and yields a fixed, guessable stream.
pub fn generate(password: &str, length: usize) -> Vec<u8> {
    if length == 0 {
        return Vec::new();
    }

    let seed = derive_seed(password);
    let mut stream = Vec::with_capacity(length);
    let mut counter = 0u64;

    while stream.len() < length {
        let mut hasher = Sha256::new();
        hasher.update(seed);
        hasher.update(counter.to_le_bytes());
        let block = hasher.finalize();

        for &byte in block.iter() {
            if stream.len() >= length {
                break;
            }
            stream.push(byte);
        }
        counter += 1;
    }

    stream
}

/// XOR every byte of the buffer with the password keystream
/// Self-inverse: applying it twice with the same password restores the input
pub fn xor_in_place(buffer: &mut [u8], password: &str) {
    let stream = generate(password, buffer.len());
    for (byte, key) in buffer.iter_mut().zip(stream.iter()) {
        *byte ^= key;
    }
}
