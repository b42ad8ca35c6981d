//! Chunk fragment extraction - the recursion floor
//!
//! Once a region is small enough, its polyline fragments are inferred
//! directly: walk the region's rectangular boundary clockwise and group
//! runs of consecutive foreground pixels (a stroke thicker than one
//! pixel crosses the boundary as a run, not a single pixel). Each run
//! contributes one fragment from the run's center to the region center.
//!
//! The raw fragments are then adjusted:
//!
//! - two runs: the region holds a simple through-stroke, so a single
//!   fragment connects the two crossing points directly;
//! - three or more runs: the region holds a junction, estimated as the
//!   interior pixel with the densest 3x3 foreground neighborhood (ties
//!   broken by Manhattan proximity to the region center); every
//!   fragment's inner endpoint is moved there.

use skeltrace_core::{Bitmap, Point, Polyline, Region};

/// Walk the region boundary clockwise, yielding the boundary pixel for
/// step `k` of `2w + 2h - 4`.
#[inline]
fn boundary_pixel(region: Region, k: i32) -> (i32, i32) {
    let (x, y, w, h) = (region.x, region.y, region.w, region.h);
    if k < w {
        // top edge, left to right
        (x + k, y)
    } else if k < w + h - 1 {
        // right edge, top to bottom
        (x + w - 1, y + k - w + 1)
    } else if k < w + h + w - 2 {
        // bottom edge, right to left
        (x + w - (k - w - h + 3), y + h - 1)
    } else {
        // left edge, bottom to top
        (x, y + h - (k - w - h - w + 4))
    }
}

/// Locate the junction estimate: the interior pixel under the highest
/// 3x3 foreground sum, ties broken by proximity to the region center.
///
/// Returns `None` when the region has no interior.
fn junction_estimate(im: &Bitmap, region: Region) -> Option<Point> {
    let center = Point::new(region.center_x(), region.center_y());
    let mut best_sum = 0u32;
    let mut best: Option<Point> = None;
    for i in region.y + 1..region.bottom() - 1 {
        for j in region.x + 1..region.right() - 1 {
            let mut sum = 0u32;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    sum += im.get_unchecked((j + dx) as u32, (i + dy) as u32) as u32;
                }
            }
            let p = Point::new(j, i);
            let nearer = match best {
                Some(b) => p.manhattan(center) < b.manhattan(center),
                None => true,
            };
            if sum > best_sum || (sum == best_sum && nearer) {
                best_sum = sum;
                best = Some(p);
            }
        }
    }
    best
}

/// Extract the polyline fragments of a single chunk.
///
/// The caller guarantees the region lies within the bitmap. Every
/// returned fragment has exactly two points; fragments only grow later,
/// during seam merging.
pub fn chunk_fragments(im: &Bitmap, region: Region) -> Vec<Polyline> {
    let center = Point::new(region.center_x(), region.center_y());

    // Crossing points of strokes through the boundary, one per run of
    // consecutive foreground boundary pixels.
    let mut crossings: Vec<Point> = Vec::new();
    let mut on = false;
    let mut last = Point::new(0, 0);
    for k in 0..2 * (region.w + region.h) - 4 {
        let (j, i) = boundary_pixel(region, k);
        if im.get_unchecked(j as u32, i as u32) != 0 {
            if !on {
                on = true;
                crossings.push(Point::new(j, i));
            }
        } else if on {
            // Run ended: average entry and exit to approximate the
            // stroke's center crossing.
            if let Some(entry) = crossings.last_mut() {
                entry.x = (entry.x + last.x) / 2;
                entry.y = (entry.y + last.y) / 2;
            }
            on = false;
        }
        last = Point::new(j, i);
    }

    match crossings.len() {
        0 => Vec::new(),
        2 => {
            // A simple through-stroke: connect the crossings directly.
            vec![Polyline::from_points(vec![crossings[0], crossings[1]])]
        }
        _ => {
            let anchor = if crossings.len() > 2 {
                junction_estimate(im, region).unwrap_or(center)
            } else {
                center
            };
            crossings
                .into_iter()
                .map(|c| Polyline::from_points(vec![c, anchor]))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chunk() {
        let im = Bitmap::new(8, 8).unwrap();
        assert!(chunk_fragments(&im, im.full_region()).is_empty());
    }

    #[test]
    fn test_through_stroke_yields_one_fragment() {
        // Horizontal line crossing the whole chunk at row 4
        let mut im = Bitmap::new(9, 9).unwrap();
        for x in 0..9 {
            im.set(x, 4, 1).unwrap();
        }
        let frags = chunk_fragments(&im, im.full_region());
        assert_eq!(frags.len(), 1);
        // The clockwise walk meets the right-edge crossing first
        assert_eq!(frags[0].points(), &[Point::new(8, 4), Point::new(0, 4)]);
    }

    #[test]
    fn test_isolated_blob_yields_nothing() {
        // Foreground that never touches the boundary
        let mut im = Bitmap::new(9, 9).unwrap();
        for y in 3..6 {
            for x in 3..6 {
                im.set(x, y, 1).unwrap();
            }
        }
        assert!(chunk_fragments(&im, im.full_region()).is_empty());
    }

    #[test]
    fn test_plus_sign_yields_four_fragments_at_junction() {
        let mut im = Bitmap::new(11, 11).unwrap();
        for k in 0..11 {
            im.set(k, 5, 1).unwrap();
            im.set(5, k, 1).unwrap();
        }
        let frags = chunk_fragments(&im, im.full_region());
        assert_eq!(frags.len(), 4);
        // All inner endpoints converge on the crossing pixel
        for f in &frags {
            assert_eq!(f.len(), 2);
            assert_eq!(f.last(), Some(Point::new(5, 5)));
        }
        // The four boundary crossings are the arms' ends
        let mut ends: Vec<Point> = frags.iter().filter_map(|f| f.first()).collect();
        ends.sort_by_key(|p| (p.x, p.y));
        assert_eq!(
            ends,
            vec![
                Point::new(0, 5),
                Point::new(5, 0),
                Point::new(5, 10),
                Point::new(10, 5),
            ]
        );
    }

    #[test]
    fn test_thick_stroke_crossing_is_averaged() {
        // A 3-px-thick vertical bar through the chunk: the boundary run
        // on the top edge spans columns 4..=6, so the crossing averages
        // to column 5.
        let mut im = Bitmap::new(11, 9).unwrap();
        for y in 0..9 {
            for x in 4..7 {
                im.set(x, y, 1).unwrap();
            }
        }
        let frags = chunk_fragments(&im, im.full_region());
        assert_eq!(frags.len(), 1);
        assert_eq!(frags[0].points(), &[Point::new(5, 0), Point::new(5, 8)]);
    }
}
