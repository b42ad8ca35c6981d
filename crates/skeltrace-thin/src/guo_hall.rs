//! Guo-Hall thinning
//!
//! Alternative skeletonization backend, implementing:
//!
//! "Parallel thinning with two-subiteration algorithms"
//! Z. Guo and R. W. Hall, Communications of the ACM 32(3),
//! pp. 359-373, March 1989.
//!
//! Produces skeletons with fewer staircase artifacts than Zhang-Suen
//! but is not pixel-identical to it; callers pick the backend
//! explicitly via [`ThinBackend`](crate::ThinBackend).

use crate::iterate::{Neighborhood, thin_to_fixed_point};
use crate::{Skeletonizer, ThinResult};
use skeltrace_core::Bitmap;

/// The Guo-Hall alternative backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuoHall;

#[inline]
fn deletable(nb: &Neighborhood, subpass: u8) -> bool {
    let (p2, p3, p4, p5, p6, p7, p8, p9) = (
        nb.n as u32,
        nb.ne as u32,
        nb.e as u32,
        nb.se as u32,
        nb.s as u32,
        nb.sw as u32,
        nb.w as u32,
        nb.nw as u32,
    );
    let c = (1 - p2) * (p3 | p4) + (1 - p4) * (p5 | p6) + (1 - p6) * (p7 | p8) + (1 - p8) * (p9 | p2);
    let n1 = (p9 | p2) + (p3 | p4) + (p5 | p6) + (p7 | p8);
    let n2 = (p2 | p3) + (p4 | p5) + (p6 | p7) + (p8 | p9);
    let n = n1.min(n2);
    let m = if subpass == 0 {
        (p6 | p7 | (1 - p9)) & p8
    } else {
        (p2 | p3 | (1 - p5)) & p4
    };
    c == 1 && (2..=3).contains(&n) && m == 0
}

impl Skeletonizer for GuoHall {
    fn thin(&self, im: &Bitmap) -> ThinResult<Bitmap> {
        Ok(thin_to_fixed_point(im, deletable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pixel_line_unchanged() {
        let mut im = Bitmap::new(30, 10).unwrap();
        for x in 1..21 {
            im.set(x, 5, 1).unwrap();
        }
        let out = GuoHall.thin(&im).unwrap();
        assert_eq!(out, im);
    }

    #[test]
    fn test_thick_bar_thins() {
        let mut im = Bitmap::new(20, 9).unwrap();
        for y in 3..6 {
            for x in 2..18 {
                im.set(x, y, 1).unwrap();
            }
        }
        let out = GuoHall.thin(&im).unwrap();
        assert!(out.count_foreground() > 0);
        assert!(out.count_foreground() < im.count_foreground());
        for x in 3..17 {
            let col: u32 = (0..9).map(|y| out.get(x, y).unwrap() as u32).sum();
            assert!(col <= 1, "column {x} thicker than 1 px");
        }
    }
}
