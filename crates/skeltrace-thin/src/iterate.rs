//! Shared iteration driver for two-subpass thinning algorithms
//!
//! Both backends follow the same scheme: per round, run two sub-passes
//! over all interior foreground pixels, mark deletable pixels, and remove
//! all marks at the end of each sub-pass (never incrementally, so the
//! result does not depend on scan order). Rounds repeat until a round
//! removes nothing. Border pixels are never evaluated.

use skeltrace_core::Bitmap;

/// The 8-neighborhood of an interior pixel, named clockwise from north.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Neighborhood {
    pub n: u8,
    pub ne: u8,
    pub e: u8,
    pub se: u8,
    pub s: u8,
    pub sw: u8,
    pub w: u8,
    pub nw: u8,
}

impl Neighborhood {
    /// Read the neighborhood of interior pixel (x, y).
    #[inline]
    pub fn at(im: &Bitmap, x: u32, y: u32) -> Self {
        Self {
            n: im.get_unchecked(x, y - 1),
            ne: im.get_unchecked(x + 1, y - 1),
            e: im.get_unchecked(x + 1, y),
            se: im.get_unchecked(x + 1, y + 1),
            s: im.get_unchecked(x, y + 1),
            sw: im.get_unchecked(x - 1, y + 1),
            w: im.get_unchecked(x - 1, y),
            nw: im.get_unchecked(x - 1, y - 1),
        }
    }

    /// Clockwise order starting at north.
    #[inline]
    pub fn clockwise(&self) -> [u8; 8] {
        [
            self.n, self.ne, self.e, self.se, self.s, self.sw, self.w, self.nw,
        ]
    }

    /// Number of 0 -> 1 transitions scanning the neighbors cyclically.
    #[inline]
    pub fn transitions(&self) -> u32 {
        let ring = self.clockwise();
        let mut count = 0;
        for k in 0..8 {
            if ring[k] == 0 && ring[(k + 1) % 8] == 1 {
                count += 1;
            }
        }
        count
    }

    /// Number of foreground neighbors (0..=8).
    #[inline]
    pub fn foreground_count(&self) -> u32 {
        self.clockwise().iter().map(|&v| v as u32).sum()
    }
}

/// Run a two-subpass thinning rule to its fixed point.
///
/// `rule(nb, subpass)` decides whether a foreground pixel with
/// neighborhood `nb` is deletable in sub-pass 0 or 1.
pub(crate) fn thin_to_fixed_point(im: &Bitmap, rule: impl Fn(&Neighborhood, u8) -> bool) -> Bitmap {
    let mut out = im.clone();
    let mut marks: Vec<(u32, u32)> = Vec::new();
    loop {
        let mut changed = false;
        for subpass in 0..2u8 {
            marks.clear();
            for y in 1..out.height().saturating_sub(1) {
                for x in 1..out.width().saturating_sub(1) {
                    if out.get_unchecked(x, y) == 0 {
                        continue;
                    }
                    let nb = Neighborhood::at(&out, x, y);
                    if rule(&nb, subpass) {
                        marks.push((x, y));
                    }
                }
            }
            for &(x, y) in &marks {
                out.set_unchecked(x, y, 0);
            }
            changed |= !marks.is_empty();
        }
        if !changed {
            return out;
        }
    }
}
