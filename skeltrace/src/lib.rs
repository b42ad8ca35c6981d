//! Skeltrace - Skeleton tracing for binary images
//!
//! Converts a raster image of strokes into vector polylines in two
//! stages:
//!
//! 1. **Thinning** erodes every stroke down to a one-pixel-wide
//!    skeleton ([`thin::thin`]);
//! 2. **Tracing** recursively splits the skeleton into chunks, reads
//!    polyline fragments off each chunk's boundary, and stitches them
//!    back together across the split seams ([`trace::trace_skeleton`]).
//!
//! # Example
//!
//! ```
//! use skeltrace::{Bitmap, thin, trace};
//!
//! // A 3-px-thick horizontal bar
//! let mut im = Bitmap::new(40, 12).unwrap();
//! for y in 4..7 {
//!     for x in 2..30 {
//!         im.set(x, y, 1).unwrap();
//!     }
//! }
//!
//! let skeleton = thin::thin(&im, thin::ThinBackend::ZhangSuen).unwrap();
//! let traced = trace::trace_skeleton(&skeleton, &trace::TraceOptions::default()).unwrap();
//! assert!(!traced.polylines.is_empty());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use skeltrace_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use skeltrace_io as io;
pub use skeltrace_thin as thin;
pub use skeltrace_trace as trace;
