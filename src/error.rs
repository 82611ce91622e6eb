use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixelveilError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Buffer length {actual} does not match {width}x{height} RGBA image ({expected} bytes)")]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Unsupported shuffle mode: {0}")]
    UnsupportedMode(String),
}

pub type Result<T> = std::result::Result<T, PixelveilError>;
