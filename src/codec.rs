//! Pixel codec: the file-facing boundary of the crate
//!
//! Decoding normalizes every supported input format to flat RGBA8 (an
//! opaque alpha channel is synthesized when the source has none), so
//! the pipeline only ever sees 4-byte pixels. Encoding always writes
//! PNG: the transformed bytes are high-entropy and must round-trip
//! exactly, which rules out lossy formats.

use crate::error::{PixelveilError, Result};
use crate::pipeline::PIXEL_BYTES;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::io::Cursor;
use std::path::Path;

/// A decoded image as a flat RGBA byte buffer plus dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RawImage {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn expected_len(&self) -> usize {
        self.pixel_count() * PIXEL_BYTES
    }
}

/// Decode an image file into a flat RGBA buffer
pub fn decode_image(path: &Path) -> Result<RawImage> {
    let rgba = image::open(path)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(RawImage {
        data: rgba.into_raw(),
        width,
        height,
    })
}

/// Encode a flat RGBA buffer to a PNG file
/// The PNG is built fully in memory and written with a single
/// `fs::write`, so a failed encode never leaves a partial output file.
pub fn encode_image(raw: &RawImage, path: &Path) -> Result<()> {
    if raw.data.len() != raw.expected_len() {
        return Err(PixelveilError::DimensionMismatch {
            width: raw.width,
            height: raw.height,
            expected: raw.expected_len(),
            actual: raw.data.len(),
        });
    }

    let mut buf = Cursor::new(Vec::new());
    PngEncoder::new(&mut buf).write_image(
        &raw.data,
        raw.width,
        raw.height,
        ExtendedColorType::Rgba8,
    )?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, buf.into_inner())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn gradient(width: u32, height: u32) -> RawImage {
        let data = (0..width as usize * height as usize * PIXEL_BYTES)
            .map(|i| (i % 256) as u8)
            .collect();
        RawImage { data, width, height }
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");

        let original = gradient(7, 5);
        encode_image(&original, &path).unwrap();

        let decoded = decode_image(&path).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn test_encode_rejects_dimension_mismatch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.png");

        let raw = RawImage {
            data: vec![0u8; 10],
            width: 2,
            height: 2,
        };
        let err = encode_image(&raw, &path);
        assert!(matches!(err, Err(PixelveilError::DimensionMismatch { .. })));
        assert!(!path.exists(), "no partial file on failure");
    }

    #[test]
    fn test_encode_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a/b/out.png");

        encode_image(&gradient(2, 2), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_decode_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.png");
        assert!(decode_image(&path).is_err());
    }

    #[test]
    fn test_decode_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"not a png at all").unwrap();
        assert!(decode_image(&path).is_err());
    }

    #[test]
    fn test_decode_normalizes_rgb_to_rgba() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rgb.png");

        // Write an RGB (3-channel) PNG, then decode through our codec
        let rgb = image::RgbImage::from_fn(3, 2, |x, y| image::Rgb([x as u8, y as u8, 7]));
        rgb.save(&path).unwrap();

        let decoded = decode_image(&path).unwrap();
        assert_eq!(decoded.data.len(), 3 * 2 * PIXEL_BYTES);
        // Alpha synthesized as fully opaque
        assert!(decoded.data.chunks_exact(4).all(|px| px[3] == 255));
    }
}
