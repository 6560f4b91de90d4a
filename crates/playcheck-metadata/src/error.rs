//! Error types for metadata operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the file system capability.
///
/// The validation engine never propagates these; each one is turned into an
/// error outcome for the path it concerns.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found.
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A file could not be decoded as an image.
    #[error("Failed to read image dimensions from {}: {message}", path.display())]
    ImageDecode { path: PathBuf, message: String },
}
