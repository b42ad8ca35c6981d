//! skeltrace-io - Loading and saving binary bitmaps
//!
//! Bridges image files and [`Bitmap`](skeltrace_core::Bitmap): an input
//! image is converted to 8-bit luma and thresholded into a binary grid,
//! and a bitmap can be written back out as a grayscale image. The format
//! is inferred from the file extension by the `image` crate.

pub mod error;

pub use error::{IoError, IoResult};

use image::{DynamicImage, GrayImage, ImageReader};
use skeltrace_core::Bitmap;
use std::path::Path;

/// Which side of the threshold counts as foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Foreground {
    /// Dark pixels are foreground (ink on paper). This is the common
    /// case for scanned line art.
    #[default]
    Dark,
    /// Bright pixels are foreground (light strokes on a dark ground).
    Light,
}

/// Options controlling how an image is binarized on load.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Luma threshold separating foreground from background.
    pub threshold: u8,
    /// Which side of the threshold is foreground.
    pub foreground: Foreground,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            threshold: 127,
            foreground: Foreground::Dark,
        }
    }
}

/// Load an image file and binarize it.
pub fn read_bitmap<P: AsRef<Path>>(path: P, options: &LoadOptions) -> IoResult<Bitmap> {
    let img = ImageReader::open(path)?.decode()?;
    bitmap_from_image(&img, options)
}

/// Binarize an already-decoded image.
pub fn bitmap_from_image(img: &DynamicImage, options: &LoadOptions) -> IoResult<Bitmap> {
    let luma = img.to_luma8();
    let (width, height) = luma.dimensions();
    let bitmap = match options.foreground {
        Foreground::Light => {
            Bitmap::from_bytes_with_threshold(width, height, luma.as_raw(), options.threshold)?
        }
        Foreground::Dark => {
            let inverted: Vec<u8> = luma.as_raw().iter().map(|&v| 255 - v).collect();
            Bitmap::from_bytes_with_threshold(width, height, &inverted, 255 - options.threshold)?
        }
    };
    Ok(bitmap)
}

/// Render a bitmap as an 8-bit grayscale image, foreground black on a
/// white ground.
pub fn bitmap_to_image(bitmap: &Bitmap) -> GrayImage {
    let (w, h) = (bitmap.width(), bitmap.height());
    let mut img = GrayImage::new(w, h);
    for y in 0..h {
        for (x, px) in bitmap.row(y).iter().enumerate() {
            img.put_pixel(x as u32, y, image::Luma([if *px != 0 { 0 } else { 255 }]));
        }
    }
    img
}

/// Write a bitmap to a file, format inferred from the extension.
pub fn write_bitmap<P: AsRef<Path>>(bitmap: &Bitmap, path: P) -> IoResult<()> {
    bitmap_to_image(bitmap).save(path)?;
    Ok(())
}
