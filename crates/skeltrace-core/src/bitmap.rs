//! Bitmap - The binary image container
//!
//! `Bitmap` is the fundamental raster type in skeltrace: a fixed-size
//! 2D grid of binary pixels (0 = background, 1 = foreground), stored
//! row-major with one byte per pixel.
//!
//! # Coordinate convention
//!
//! Pixels are addressed by `(x, y)` with `x` the column and `y` the row,
//! origin at the top-left corner. All traced polylines are expressed in
//! this coordinate space.
//!
//! # Ownership model
//!
//! A `Bitmap` owns its pixel buffer. Thinning produces a new `Bitmap`
//! rather than mutating its input; during tracing the skeleton bitmap is
//! read-only.

use crate::error::{Error, Result};
use crate::region::Region;

/// A binary raster image.
///
/// Every pixel is either 0 (background) or 1 (foreground); constructors
/// validate this invariant so downstream algorithms can sum pixel values
/// directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Row-major pixel data, one byte per pixel, values in {0, 1}
    data: Vec<u8>,
}

impl Bitmap {
    /// Create a new all-background bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize],
        })
    }

    /// Create a bitmap from a raw row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data.len() != width * height`,
    /// [`Error::InvalidDimension`] for a zero dimension, and
    /// [`Error::NotBinary`] if any byte is neither 0 nor 1.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if data.len() != width as usize * height as usize {
            return Err(Error::BufferSizeMismatch {
                len: data.len(),
                width,
                height,
            });
        }
        if let Some((index, &value)) = data.iter().enumerate().find(|&(_, &v)| v > 1) {
            return Err(Error::NotBinary { index, value });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a bitmap by thresholding an arbitrary byte buffer.
    ///
    /// Bytes strictly greater than `threshold` become foreground.
    pub fn from_bytes_with_threshold(
        width: u32,
        height: u32,
        bytes: &[u8],
        threshold: u8,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if bytes.len() != width as usize * height as usize {
            return Err(Error::BufferSizeMismatch {
                len: bytes.len(),
                width,
                height,
            });
        }
        let data = bytes.iter().map(|&b| u8::from(b > threshold)).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The full-image region `(0, 0, width, height)`.
    #[inline]
    pub fn full_region(&self) -> Region {
        Region::new_unchecked(0, 0, self.width as i32, self.height as i32)
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height);
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Check whether the pixel at (x, y) is foreground.
    ///
    /// Out-of-bounds coordinates read as background.
    #[inline]
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        self.get(x, y) == Some(1)
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are out of bounds
    /// and [`Error::NotBinary`] if `val` is neither 0 nor 1.
    pub fn set(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x: x as i32,
                y: y as i32,
                width: self.width,
                height: self.height,
            });
        }
        if val > 1 {
            return Err(Error::NotBinary {
                index: y as usize * self.width as usize + x as usize,
                value: val,
            });
        }
        self.data[y as usize * self.width as usize + x as usize] = val;
        Ok(())
    }

    /// Set a pixel value without bounds or value checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, val: u8) {
        debug_assert!(x < self.width && y < self.height && val <= 1);
        self.data[y as usize * self.width as usize + x as usize] = val;
    }

    /// Get a row of pixels as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Count the foreground pixels in the whole image.
    pub fn count_foreground(&self) -> u64 {
        self.data.iter().map(|&v| v as u64).sum()
    }

    /// Check whether the whole image is background.
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }

    /// Check that a region lies entirely within the bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] otherwise.
    pub fn check_region(&self, region: Region) -> Result<()> {
        if region.x < 0
            || region.y < 0
            || region.w <= 0
            || region.h <= 0
            || region.right() > self.width as i32
            || region.bottom() > self.height as i32
        {
            return Err(Error::RegionOutOfBounds {
                region: (region.x, region.y, region.w, region.h),
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Check whether a region contains at least one foreground pixel.
    ///
    /// The caller guarantees the region is in bounds.
    pub fn region_has_foreground(&self, region: Region) -> bool {
        for y in region.y..region.bottom() {
            let row = self.row(y as u32);
            for x in region.x..region.right() {
                if row[x as usize] != 0 {
                    return true;
                }
            }
        }
        false
    }
}
