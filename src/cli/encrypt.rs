use crate::codec::{decode_image, encode_image};
use crate::config::ShuffleMode;
use crate::error::Result;
use crate::pipeline::encrypt_buffer;
use std::path::Path;

/// Options for the encrypt command
#[derive(Debug, Clone, Default)]
pub struct EncryptOptions {
    pub password: String,
    pub shuffle: ShuffleMode,
}

/// Encrypt an image file: decode, XOR + optional shuffle, write PNG
pub fn encrypt_image(
    input_path: &Path,
    output_path: &Path,
    options: &EncryptOptions,
) -> Result<()> {
    let mut raw = decode_image(input_path)?;

    encrypt_buffer(
        &mut raw.data,
        raw.width,
        raw.height,
        &options.password,
        options.shuffle,
    )?;

    encode_image(&raw, output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_test_image(path: &Path, width: u32, height: u32) {
        let img = image::RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([x as u8, y as u8, (x + y) as u8, 255])
        });
        img.save(path).unwrap();
    }

    #[test]
    fn test_encrypt_writes_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.png");
        let output = dir.path().join("output.png");

        write_test_image(&input, 16, 16);

        let options = EncryptOptions {
            password: "my_password".into(),
            ..Default::default()
        };
        encrypt_image(&input, &output, &options).unwrap();
        assert!(output.exists());

        // Output must differ from the input and keep dimensions
        let original = decode_image(&input).unwrap();
        let encrypted = decode_image(&output).unwrap();
        assert_eq!(original.width, encrypted.width);
        assert_eq!(original.height, encrypted.height);
        assert_ne!(original.data, encrypted.data);
    }

    #[test]
    fn test_encrypt_is_deterministic() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.png");
        let out1 = dir.path().join("out1.png");
        let out2 = dir.path().join("out2.png");

        write_test_image(&input, 8, 8);

        let options = EncryptOptions {
            password: "my_password".into(),
            ..Default::default()
        };
        encrypt_image(&input, &out1, &options).unwrap();
        encrypt_image(&input, &out2, &options).unwrap();

        assert_eq!(
            decode_image(&out1).unwrap().data,
            decode_image(&out2).unwrap().data
        );
    }

    #[test]
    fn test_encrypt_missing_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("missing.png");
        let output = dir.path().join("output.png");

        let result = encrypt_image(&input, &output, &EncryptOptions::default());
        assert!(result.is_err());
        assert!(!output.exists());
    }
}
