//! Error types for the checkerboard-alpha crate.

use std::path::PathBuf;

/// Errors that can occur while restoring transparency to an image file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input image does not exist.
    #[error("input path does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The output path names a format other than PNG.
    #[error("unsupported output format: {0} (output is always PNG)")]
    UnsupportedFormat(String),

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error occurred while decoding or encoding an image.
    #[error("image processing error: {0}")]
    Image(#[from] image::ImageError),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
