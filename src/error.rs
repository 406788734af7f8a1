//! Crate-level error type and `Result` alias.
//! Separates the input side (not found, open, decode) from the output side
//! (encode, write), and carries resampling and preset errors from the
//! underlying crates.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input image not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image has no pixels to crop: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Icon size must be greater than 0")]
    ZeroSize,

    #[error("No icon sizes requested")]
    NoSizes,

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Pixel buffer of {len} bytes does not fit a {width}x{height} image")]
    PixelBuffer { width: u32, height: u32, len: usize },

    #[error("Pixel buffer error: {0}")]
    ImageBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Invalid params preset: {0}")]
    Params(#[from] serde_json::Error),
}
