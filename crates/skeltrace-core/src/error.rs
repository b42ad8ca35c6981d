//! Error types for skeltrace-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Skeltrace core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid bitmap dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel data is not binary
    #[error("non-binary pixel value {value} at index {index}")]
    NotBinary { index: usize, value: u8 },

    /// Buffer length does not match dimensions
    #[error("buffer length {len} does not match {width}x{height}")]
    BufferSizeMismatch { len: usize, width: u32, height: u32 },

    /// Coordinates out of bounds
    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height}")]
    OutOfBounds { x: i32, y: i32, width: u32, height: u32 },

    /// Region not contained in the bitmap
    #[error("region ({}, {}, {}x{}) exceeds bitmap bounds {width}x{height}", .region.0, .region.1, .region.2, .region.3)]
    RegionOutOfBounds {
        region: (i32, i32, i32, i32),
        width: u32,
        height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result type alias for skeltrace-core operations
pub type Result<T> = std::result::Result<T, Error>;
