//! Seam finding - picking where to split a region
//!
//! A seam is a single row or column along which a region is cut into two
//! sub-regions. A good seam crosses as few strokes as possible, so its
//! cost is the foreground count along the cut line and the line just
//! before it. Candidate positions whose span ends touch a stroke are
//! skipped entirely: cutting there would leave the two halves visually
//! connected across the seam.
//!
//! Equal-cost candidates prefer the position nearer the region midline,
//! which keeps the divide-and-conquer tree balanced. Horizontal (row)
//! candidates are scanned first; a vertical candidate takes over on
//! strictly lower cost, or on equal cost when nearer its midline than the
//! previous vertical candidate. This exact override order is part of the
//! traced output contract and must not be "improved".

use skeltrace_core::{Bitmap, Region};

/// Orientation of a seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeamOrientation {
    /// A row cut: the region splits into a top and a bottom part.
    Horizontal,
    /// A column cut: the region splits into a left and a right part.
    Vertical,
}

/// A chosen cut line within a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seam {
    pub orientation: SeamOrientation,
    /// Row index for a horizontal seam, column index for a vertical one.
    pub coord: i32,
}

impl Seam {
    /// Split a region along this seam.
    ///
    /// The seam line itself belongs to the second sub-region.
    pub fn split(&self, region: Region) -> (Region, Region) {
        match self.orientation {
            SeamOrientation::Horizontal => region.split_at_row(self.coord),
            SeamOrientation::Vertical => region.split_at_col(self.coord),
        }
    }
}

/// Margin kept clear of the region edges when scanning seam candidates,
/// avoiding degenerate slivers.
const SEAM_MARGIN: i32 = 3;

/// Whether `candidate` lies nearer `center` than the previous candidate
/// (no previous candidate counts as infinitely far).
#[inline]
fn nearer_center(candidate: i32, center: i32, prev: Option<i32>) -> bool {
    match prev {
        Some(p) => (candidate - center).abs() < (p - center).abs(),
        None => true,
    }
}

/// Search for the cheapest valid seam through `region`.
///
/// Rows are considered only when `region.h > chunk_size`, columns only
/// when `region.w > chunk_size`. Returns `None` when no candidate
/// qualifies, e.g. because strokes touch every candidate line's ends;
/// the caller then falls back to treating the whole region as a chunk.
pub fn find_seam(im: &Bitmap, region: Region, chunk_size: i32) -> Option<Seam> {
    // Cost cap: a seam crossing this much foreground is never worth taking.
    let mut best_cost: u32 = im.width() + im.height();
    let mut best_row: Option<i32> = None;
    let mut best_col: Option<i32> = None;

    let fg = |x: i32, y: i32| im.get_unchecked(x as u32, y as u32) != 0;

    if region.h > chunk_size {
        let cy = region.center_y();
        for i in region.y + SEAM_MARGIN..region.bottom() - SEAM_MARGIN {
            // A stroke on the span ends would bridge the two halves.
            if fg(region.x, i)
                || fg(region.x, i - 1)
                || fg(region.right() - 1, i)
                || fg(region.right() - 1, i - 1)
            {
                continue;
            }
            let mut cost = 0u32;
            for j in region.x..region.right() {
                cost += im.get_unchecked(j as u32, i as u32) as u32;
                cost += im.get_unchecked(j as u32, (i - 1) as u32) as u32;
            }
            if cost < best_cost || (cost == best_cost && nearer_center(i, cy, best_row)) {
                best_cost = cost;
                best_row = Some(i);
            }
        }
    }

    if region.w > chunk_size {
        let cx = region.center_x();
        for j in region.x + SEAM_MARGIN..region.right() - SEAM_MARGIN {
            if fg(j, region.y)
                || fg(j, region.bottom() - 1)
                || fg(j - 1, region.y)
                || fg(j - 1, region.bottom() - 1)
            {
                continue;
            }
            let mut cost = 0u32;
            for i in region.y..region.bottom() {
                cost += im.get_unchecked(j as u32, i as u32) as u32;
                cost += im.get_unchecked((j - 1) as u32, i as u32) as u32;
            }
            if cost < best_cost || (cost == best_cost && nearer_center(j, cx, best_col)) {
                best_cost = cost;
                // The vertical candidate defeats any horizontal one.
                best_row = None;
                best_col = Some(j);
            }
        }
    }

    if let Some(row) = best_row {
        Some(Seam {
            orientation: SeamOrientation::Horizontal,
            coord: row,
        })
    } else {
        best_col.map(|col| Seam {
            orientation: SeamOrientation::Vertical,
            coord: col,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_bitmap() -> Bitmap {
        // Horizontal line at row 5, columns 0..20, in a 30x10 grid
        let mut im = Bitmap::new(30, 10).unwrap();
        for x in 0..20 {
            im.set(x, 5, 1).unwrap();
        }
        im
    }

    #[test]
    fn test_vertical_seam_through_horizontal_line() {
        let im = line_bitmap();
        let region = im.full_region();
        // Height 10 does not exceed the chunk floor, width 30 does:
        // only column cuts are candidates, and every one crosses the
        // stroke except those right of x=20.
        let seam = find_seam(&im, region, 10).unwrap();
        assert_eq!(seam.orientation, SeamOrientation::Vertical);
        assert!(seam.coord > 20, "seam {} should clear the stroke", seam.coord);
    }

    #[test]
    fn test_zero_cost_seam_prefers_midline() {
        let im = Bitmap::new(40, 8).unwrap();
        let region = im.full_region();
        let seam = find_seam(&im, region, 10).unwrap();
        assert_eq!(seam.orientation, SeamOrientation::Vertical);
        assert_eq!(seam.coord, region.center_x());
    }

    #[test]
    fn test_no_seam_when_ends_blocked() {
        // A vertical stroke pair along top and bottom rows blocks every
        // column candidate's span ends.
        let mut im = Bitmap::new(20, 6).unwrap();
        for x in 0..20 {
            im.set(x, 0, 1).unwrap();
            im.set(x, 5, 1).unwrap();
        }
        assert_eq!(find_seam(&im, im.full_region(), 10), None);
    }

    #[test]
    fn test_split_assigns_seam_line_to_second_region() {
        let region = Region::new_unchecked(0, 0, 20, 10);
        let seam = Seam {
            orientation: SeamOrientation::Vertical,
            coord: 12,
        };
        let (left, right) = seam.split(region);
        assert_eq!(left.right(), 12);
        assert_eq!(right.x, 12);
        assert_eq!(left.h, 10);
        assert_eq!(right.w, 8);
    }
}
