//! Zhang-Suen thinning
//!
//! The reference skeletonization backend, implementing:
//!
//! "A fast parallel algorithm for thinning digital patterns"
//! T. Y. Zhang and C. Y. Suen, Communications of the ACM 27(3),
//! pp. 236-239, March 1984.
//!
//! # Algorithm
//!
//! Each round runs two sub-passes over the interior foreground pixels.
//! For a pixel with 8-neighborhood scanned clockwise from north, let `A`
//! be the number of 0 -> 1 transitions in the cyclic scan and `B` the
//! number of foreground neighbors. The pixel is deletable iff
//!
//! - `A == 1`,
//! - `2 <= B <= 6`,
//! - sub-pass 1: `N*E*S == 0` and `E*S*W == 0`,
//! - sub-pass 2: `N*E*W == 0` and `N*S*W == 0`.
//!
//! Deletions are applied at the end of each sub-pass, so the result is
//! independent of scan order. Rounds repeat until nothing is deleted;
//! the loop always terminates since deletion is monotonic and bounded
//! by the foreground pixel count.

use crate::iterate::{Neighborhood, thin_to_fixed_point};
use crate::{Skeletonizer, ThinResult};
use skeltrace_core::Bitmap;

/// The Zhang-Suen reference backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZhangSuen;

#[inline]
fn deletable(nb: &Neighborhood, subpass: u8) -> bool {
    let b = nb.foreground_count();
    if !(2..=6).contains(&b) || nb.transitions() != 1 {
        return false;
    }
    let (m1, m2) = if subpass == 0 {
        (nb.n * nb.e * nb.s, nb.e * nb.s * nb.w)
    } else {
        (nb.n * nb.e * nb.w, nb.n * nb.s * nb.w)
    };
    m1 == 0 && m2 == 0
}

impl Skeletonizer for ZhangSuen {
    fn thin(&self, im: &Bitmap) -> ThinResult<Bitmap> {
        Ok(thin_to_fixed_point(im, deletable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pixel_line_unchanged() {
        // A 1-px-wide line is already a skeleton
        let mut im = Bitmap::new(30, 10).unwrap();
        for x in 0..20 {
            im.set(x, 5, 1).unwrap();
        }
        let out = ZhangSuen.thin(&im).unwrap();
        assert_eq!(out, im);
    }

    #[test]
    fn test_thick_bar_thins_to_one_pixel_rows() {
        // A 3-px-thick horizontal bar collapses to a single centerline
        let mut im = Bitmap::new(20, 9).unwrap();
        for y in 3..6 {
            for x in 2..18 {
                im.set(x, y, 1).unwrap();
            }
        }
        let out = ZhangSuen.thin(&im).unwrap();
        // No column may stay thicker than one pixel
        for x in 0..20 {
            let col: u32 = (0..9).map(|y| out.get(x, y).unwrap() as u32).sum();
            assert!(col <= 1, "column {x} not 1-px wide");
        }
        assert!(out.count_foreground() > 0);
        assert!(out.count_foreground() < im.count_foreground());
    }

    #[test]
    fn test_borders_untouched() {
        let mut im = Bitmap::new(6, 6).unwrap();
        for x in 0..6 {
            im.set(x, 0, 1).unwrap();
        }
        let out = ZhangSuen.thin(&im).unwrap();
        for x in 0..6 {
            assert_eq!(out.get(x, 0), Some(1));
        }
    }
}
