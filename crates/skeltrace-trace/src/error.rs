//! Error types for skeltrace-trace

use thiserror::Error;

/// Errors that can occur during tracing
#[derive(Debug, Error)]
pub enum TraceError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] skeltrace_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for tracing operations
pub type TraceResult<T> = Result<T, TraceError>;
