//! Error types for skeltrace-thin

use thiserror::Error;

/// Errors that can occur during thinning
#[derive(Debug, Error)]
pub enum ThinError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] skeltrace_core::Error),
}

/// Result type for thinning operations
pub type ThinResult<T> = Result<T, ThinError>;
