//! Error types for Media Codec

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("invalid image: no `;base64,` marker in data URI")]
    InvalidImage,

    #[error("decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("unknown image format")]
    UnknownFormat,

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("extension does not exist: {}", .0.display())]
    MissingExtension(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
