//! Region - Rectangular sub-areas of a bitmap
//!
//! A `Region` describes the rectangle a recursive trace call is working
//! on. Regions are transient: created per recursion step, split along
//! seams, and never persisted past the call that created them.

use crate::error::{Error, Result};

/// A rectangle region within a bitmap.
///
/// Small `Copy` type; coordinates are signed so splitting arithmetic
/// never wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Region {
    /// Create a new region.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is not positive.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w <= 0 || h <= 0 {
            return Err(Error::InvalidParameter(format!(
                "region dimensions must be positive: w={w}, h={h}"
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a region without validation.
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Get the right x coordinate (exclusive).
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive).
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Get the center x coordinate.
    #[inline]
    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    /// Get the center y coordinate.
    #[inline]
    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    /// Check if a point is inside the region.
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Split along a horizontal seam at row `row`.
    ///
    /// Returns the region above the seam and the region from the seam
    /// down. `row` must lie strictly inside `(y, bottom)`.
    pub fn split_at_row(&self, row: i32) -> (Region, Region) {
        debug_assert!(row > self.y && row < self.bottom());
        (
            Region::new_unchecked(self.x, self.y, self.w, row - self.y),
            Region::new_unchecked(self.x, row, self.w, self.bottom() - row),
        )
    }

    /// Split along a vertical seam at column `col`.
    ///
    /// Returns the region left of the seam and the region from the seam
    /// right. `col` must lie strictly inside `(x, right)`.
    pub fn split_at_col(&self, col: i32) -> (Region, Region) {
        debug_assert!(col > self.x && col < self.right());
        (
            Region::new_unchecked(self.x, self.y, col - self.x, self.h),
            Region::new_unchecked(col, self.y, self.right() - col, self.h),
        )
    }
}
