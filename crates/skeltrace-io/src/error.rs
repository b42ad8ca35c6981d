//! I/O error types
//!
//! A single error type for all bitmap loading and saving; underlying
//! decoder and filesystem errors are wrapped so callers only handle one
//! type.

use thiserror::Error;

/// Error type for bitmap I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image could not be decoded or encoded
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// An error from the core library (e.g. degenerate dimensions)
    #[error("core error: {0}")]
    Core(#[from] skeltrace_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
