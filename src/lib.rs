//! Pixelveil - password-keyed image obfuscation
//!
//! Obfuscates raster images by XOR-masking every channel byte against a
//! password-derived keystream, then optionally shuffling pixel
//! positions with a password-seeded permutation. Both transforms are
//! symmetric: the same password (and shuffle mode) reverses them.
//!
//! ## Transform Pipeline
//!
//! ```text
//! Encrypt:  Decode → XOR keystream → Shuffle pixels → Encode PNG
//! Decrypt:  Decode → Unshuffle pixels → XOR keystream → Encode PNG
//! ```
//!
//! - **Keystream**: SHA-256 counter mode over a password-derived seed
//! - **Shuffle**: Fisher-Yates permutation from a seeded StdRng,
//!   domain-separated from the keystream seed
//! - **Codec**: any readable input normalized to RGBA8; output is PNG
//!
//! This is visual obfuscation, not cryptography: there is no
//! authentication, no nonce, and no resistance to known-plaintext
//! attacks. Do not use it to protect anything valuable.
//!
//! ## Example
//!
//! ```no_run
//! use pixelveil::cli::{encrypt_image, decrypt_image, EncryptOptions, DecryptOptions};
//! use std::path::Path;
//!
//! let options = EncryptOptions {
//!     password: "hunter2".into(),
//!     ..Default::default()
//! };
//! encrypt_image(
//!     Path::new("photo.jpg"),
//!     Path::new("veiled.png"),
//!     &options,
//! ).unwrap();
//!
//! let options = DecryptOptions {
//!     password: "hunter2".into(),
//!     ..Default::default()
//! };
//! decrypt_image(
//!     Path::new("veiled.png"),
//!     Path::new("restored.png"),
//!     &options,
//! ).unwrap();
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod pipeline;

pub use codec::{decode_image, encode_image, RawImage};
pub use config::ShuffleMode;
pub use error::{PixelveilError, Result};
pub use pipeline::{decrypt_buffer, encrypt_buffer};
