//! Skeltrace Core - Basic data structures for skeleton tracing
//!
//! This crate provides the fundamental data structures used throughout
//! the skeltrace library:
//!
//! - [`Bitmap`] - Binary raster image (0 = background, 1 = foreground)
//! - [`Region`] - Rectangle sub-area of a bitmap
//! - [`Point`] / [`Polyline`] - Traced stroke geometry
//!
//! Higher-level crates build on these: `skeltrace-thin` reduces a
//! `Bitmap` to a one-pixel-wide skeleton, and `skeltrace-trace` converts
//! the skeleton into `Polyline`s.

pub mod bitmap;
pub mod error;
pub mod polyline;
pub mod region;

pub use bitmap::Bitmap;
pub use error::{Error, Result};
pub use polyline::{Point, Polyline};
pub use region::Region;
