//! Transform pipeline
//!
//! Encrypt: XOR the buffer with the password keystream, then (mode
//! permitting) shuffle whole pixels. Decrypt mirrors it in reverse:
//! un-shuffle first, then XOR. The pairing is a compatibility contract;
//! decrypting with a mismatched shuffle mode yields deterministic
//! garbage, never an error.

pub mod keystream;
pub mod permute;

pub use keystream::*;
pub use permute::*;

use crate::config::ShuffleMode;
use crate::error::{PixelveilError, Result};

/// Encrypt a flat RGBA buffer in place
pub fn encrypt_buffer(
    data: &mut Vec<u8>,
    width: u32,
    height: u32,
    password: &str,
    mode: ShuffleMode,
) -> Result<()> {
    check_dimensions(data.len(), width, height)?;
    match mode {
        ShuffleMode::Disabled => encrypt_xor_only(data, password),
        ShuffleMode::Enabled => encrypt_shuffled(data, width, height, password),
    }
    Ok(())
}

/// Decrypt a flat RGBA buffer in place
pub fn decrypt_buffer(
    data: &mut Vec<u8>,
    width: u32,
    height: u32,
    password: &str,
    mode: ShuffleMode,
) -> Result<()> {
    check_dimensions(data.len(), width, height)?;
    match mode {
        ShuffleMode::Disabled => decrypt_xor_only(data, password),
        ShuffleMode::Enabled => decrypt_shuffled(data, width, height, password),
    }
    Ok(())
}

fn encrypt_xor_only(data: &mut [u8], password: &str) {
    keystream::xor_in_place(data, password);
}

fn encrypt_shuffled(data: &mut Vec<u8>, width: u32, height: u32, password: &str) {
    keystream::xor_in_place(data, password);

    let pixels = width as usize * height as usize;
    let perm = permute::derive_permutation(password, pixels);
    *data = permute::apply_pixel_permutation(data, &perm);
}

fn decrypt_xor_only(data: &mut [u8], password: &str) {
    keystream::xor_in_place(data, password);
}

fn decrypt_shuffled(data: &mut Vec<u8>, width: u32, height: u32, password: &str) {
    let pixels = width as usize * height as usize;
    let perm = permute::derive_permutation(password, pixels);
    let inverse = permute::invert_permutation(&perm);
    *data = permute::apply_pixel_permutation(data, &inverse);

    keystream::xor_in_place(data, password);
}

/// A flat RGBA buffer must hold exactly width * height pixels
fn check_dimensions(len: usize, width: u32, height: u32) -> Result<()> {
    let expected = width as usize * height as usize * permute::PIXEL_BYTES;
    if len != expected {
        return Err(PixelveilError::DimensionMismatch {
            width,
            height,
            expected,
            actual: len,
        });
    }
    Ok(())
}
