//! skeltrace-trace - Divide-and-conquer skeleton tracing
//!
//! Converts a thinned binary [`Bitmap`](skeltrace_core::Bitmap) into a
//! set of open [`Polyline`](skeltrace_core::Polyline)s approximating the
//! stroke centerlines:
//!
//! - **Seam finding** ([`find_seam`]) - pick a low-cost row or column
//!   to split an oversized region
//! - **Chunk extraction** ([`chunk_fragments`]) - infer the fragments
//!   crossing a small region from its boundary pixels
//! - **Merging** ([`merge_fragments`]) - stitch fragments meeting at a
//!   seam back into continuous polylines
//! - **Tracing** ([`trace_skeleton`]) - the recursive orchestrator
//!   tying the three together
//!
//! # Example
//!
//! ```
//! use skeltrace_core::Bitmap;
//! use skeltrace_trace::{TraceOptions, trace_skeleton};
//!
//! let mut im = Bitmap::new(30, 10).unwrap();
//! for x in 0..20 {
//!     im.set(x, 5, 1).unwrap();
//! }
//! let traced = trace_skeleton(&im, &TraceOptions::default()).unwrap();
//! assert_eq!(traced.polylines.len(), 1);
//! ```

pub mod chunk;
pub mod error;
pub mod merge;
pub mod seam;
pub mod trace;

// Re-export core types
pub use skeltrace_core;

pub use chunk::chunk_fragments;
pub use error::{TraceError, TraceResult};
pub use merge::{CONTINUITY_THRESHOLD, merge_fragments};
pub use seam::{Seam, SeamOrientation, find_seam};
pub use trace::{TraceOptions, Traced, trace_skeleton};
