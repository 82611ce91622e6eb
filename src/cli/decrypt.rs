use crate::codec::{decode_image, encode_image};
use crate::config::ShuffleMode;
use crate::error::Result;
use crate::pipeline::decrypt_buffer;
use std::path::Path;

/// Options for the decrypt command
#[derive(Debug, Clone, Default)]
pub struct DecryptOptions {
    pub password: String,
    pub shuffle: ShuffleMode,
}

/// Decrypt an image file: decode, un-shuffle (if used) + XOR, write PNG
/// The shuffle mode must match the one used at encryption time; a
/// mismatch produces garbage pixels, not an error.
pub fn decrypt_image(
    input_path: &Path,
    output_path: &Path,
    options: &DecryptOptions,
) -> Result<()> {
    let mut raw = decode_image(input_path)?;

    decrypt_buffer(
        &mut raw.data,
        raw.width,
        raw.height,
        &options.password,
        options.shuffle,
    )?;

    encode_image(&raw, output_path)
}
