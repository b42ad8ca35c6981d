//! skeltrace-thin - Skeletonization backends
//!
//! Reduces a binary [`Bitmap`] to a topologically equivalent skeleton in
//! which every stroke is one pixel wide. Two backends are provided behind
//! the [`Skeletonizer`] capability trait:
//!
//! - [`ZhangSuen`] - the mandatory reference algorithm (default)
//! - [`GuoHall`] - an alternative with fewer staircase artifacts
//!
//! Backend choice is an explicit configuration decision via
//! [`ThinBackend`]; the two algorithms are not guaranteed to produce
//! pixel-identical skeletons, so there is no silent fallback between
//! them.
//!
//! # Example
//!
//! ```
//! use skeltrace_core::Bitmap;
//! use skeltrace_thin::{ThinBackend, thin};
//!
//! let mut im = Bitmap::new(30, 10).unwrap();
//! for x in 1..21 {
//!     im.set(x, 5, 1).unwrap();
//! }
//! // A 1-px line is its own skeleton
//! let skeleton = thin(&im, ThinBackend::default()).unwrap();
//! assert_eq!(skeleton, im);
//! ```

pub mod error;
mod guo_hall;
mod iterate;
mod zhang_suen;

pub use error::{ThinError, ThinResult};
pub use guo_hall::GuoHall;
pub use zhang_suen::ZhangSuen;

use skeltrace_core::Bitmap;

/// A skeletonization algorithm.
///
/// Implementations take a binary bitmap and return a new bitmap of
/// identical dimensions whose foreground forms a 1-px-wide skeleton,
/// preserving connectivity and the number of loops and branches.
pub trait Skeletonizer {
    /// Thin `im` to its skeleton.
    fn thin(&self, im: &Bitmap) -> ThinResult<Bitmap>;
}

/// Backend selection for [`thin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThinBackend {
    /// Zhang-Suen reference algorithm
    #[default]
    ZhangSuen,

    /// Guo-Hall two-subiteration algorithm
    GuoHall,
}

impl ThinBackend {
    /// Get the skeletonizer implementing this backend.
    pub fn skeletonizer(self) -> &'static dyn Skeletonizer {
        match self {
            ThinBackend::ZhangSuen => &ZhangSuen,
            ThinBackend::GuoHall => &GuoHall,
        }
    }
}

/// Thin a binary bitmap with the selected backend.
///
/// Returns a new bitmap; the input is left untouched.
pub fn thin(im: &Bitmap, backend: ThinBackend) -> ThinResult<Bitmap> {
    backend.skeletonizer().thin(im)
}
