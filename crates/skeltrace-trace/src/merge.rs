//! Fragment merging across a seam
//!
//! After a region is traced as two halves, fragments that were cut by
//! the seam exist as separate polylines whose endpoints meet at the cut
//! line. Merging stitches them back into continuous polylines.
//!
//! For every incoming fragment (in reverse insertion order, which fixes
//! the processing order and keeps the result deterministic), four
//! end-matching modes are tried in a fixed priority: each mode pairs one
//! end of the incoming fragment with one end of an existing fragment.
//! The incoming end must sit exactly on the seam; the existing end may
//! be off by one pixel, absorbing the rounding introduced by crossing
//! averaging and junction estimation. Among qualifying candidates the
//! nearest along the seam wins, provided it is within the continuity
//! threshold. Fragments that match nobody are appended as independent
//! polylines.

use crate::seam::{Seam, SeamOrientation};
use skeltrace_core::{Point, Polyline};

/// Maximum perpendicular offset (exclusive) between two fragment ends
/// still considered the same stroke crossing.
pub const CONTINUITY_THRESHOLD: i32 = 4;

/// One end of a polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FragmentEnd {
    Head,
    Tail,
}

/// The four end-matching modes, tried in priority order: the existing
/// fragment's end first, then which end of the incoming fragment.
const MATCH_PRIORITY: [(FragmentEnd, FragmentEnd); 4] = [
    (FragmentEnd::Tail, FragmentEnd::Head),
    (FragmentEnd::Head, FragmentEnd::Head),
    (FragmentEnd::Tail, FragmentEnd::Tail),
    (FragmentEnd::Head, FragmentEnd::Tail),
];

#[inline]
fn end_point(frag: &Polyline, end: FragmentEnd) -> Option<Point> {
    match end {
        FragmentEnd::Head => frag.first(),
        FragmentEnd::Tail => frag.last(),
    }
}

/// Coordinate on the split axis (compared against the seam position).
#[inline]
fn axis_coord(p: Point, orientation: SeamOrientation) -> i32 {
    match orientation {
        SeamOrientation::Horizontal => p.y,
        SeamOrientation::Vertical => p.x,
    }
}

/// Coordinate along the seam (perpendicular to the split axis).
#[inline]
fn perp_coord(p: Point, orientation: SeamOrientation) -> i32 {
    match orientation {
        SeamOrientation::Horizontal => p.x,
        SeamOrientation::Vertical => p.y,
    }
}

/// Try one matching mode for fragment `i` of `from` against `into`.
///
/// On success the fragment is absorbed into the matched polyline and
/// removed from `from`.
fn try_merge(
    into: &mut [Polyline],
    from: &mut Vec<Polyline>,
    i: usize,
    seam: Seam,
    a_end: FragmentEnd,
    b_end: FragmentEnd,
) -> bool {
    let Some(p1) = end_point(&from[i], b_end) else {
        return false;
    };
    // The incoming end must lie exactly on the seam.
    if (axis_coord(p1, seam.orientation) - seam.coord).abs() > 0 {
        return false;
    }

    let mut best: Option<usize> = None;
    let mut best_dist = CONTINUITY_THRESHOLD;
    for (j, cand) in into.iter().enumerate() {
        let Some(p0) = end_point(cand, a_end) else {
            continue;
        };
        // The existing end may be one pixel off the seam.
        if (axis_coord(p0, seam.orientation) - seam.coord).abs() > 1 {
            continue;
        }
        let d = (perp_coord(p0, seam.orientation) - perp_coord(p1, seam.orientation)).abs();
        if d < best_dist {
            best = Some(j);
            best_dist = d;
        }
    }
    let Some(j) = best else {
        return false;
    };

    let mut b = from.remove(i);
    let target = &mut into[j];
    // When the two ends coincide exactly, keep a single copy of the
    // shared seam point.
    if end_point(target, a_end) == end_point(&b, b_end) {
        match b_end {
            FragmentEnd::Head => b.remove_first(),
            FragmentEnd::Tail => b.remove_last(),
        }
    }
    match (a_end, b_end) {
        (FragmentEnd::Tail, FragmentEnd::Head) => target.append(b),
        (FragmentEnd::Head, FragmentEnd::Head) => {
            b.reverse();
            target.prepend(b);
        }
        (FragmentEnd::Tail, FragmentEnd::Tail) => {
            b.reverse();
            target.append(b);
        }
        (FragmentEnd::Head, FragmentEnd::Tail) => target.prepend(b),
    }
    true
}

/// Merge `from` into `into`, stitching fragments across the seam.
///
/// Mutates `into` in place; fragments of `from` that match nothing are
/// appended unchanged.
pub fn merge_fragments(into: &mut Vec<Polyline>, mut from: Vec<Polyline>, seam: Seam) {
    if into.is_empty() {
        into.append(&mut from);
        return;
    }
    for i in (0..from.len()).rev() {
        for &(a_end, b_end) in &MATCH_PRIORITY {
            if try_merge(into, &mut from, i, seam, a_end, b_end) {
                break;
            }
        }
    }
    into.append(&mut from);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pl(pts: &[(i32, i32)]) -> Polyline {
        Polyline::from_points(pts.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    fn vseam(coord: i32) -> Seam {
        Seam {
            orientation: SeamOrientation::Vertical,
            coord,
        }
    }

    #[test]
    fn test_tail_head_merge() {
        // Left half ends at the seam, right half starts exactly on it
        let mut into = vec![pl(&[(0, 5), (10, 5)])];
        let from = vec![pl(&[(10, 5), (19, 5)])];
        merge_fragments(&mut into, from, vseam(10));
        assert_eq!(into.len(), 1);
        // One shared point removed at the join
        assert_eq!(into[0].points(), pl(&[(0, 5), (10, 5), (19, 5)]).points());
    }

    #[test]
    fn test_off_by_one_existing_end_still_matches() {
        // Existing end sits one pixel short of the seam (rounding)
        let mut into = vec![pl(&[(0, 5), (9, 5)])];
        let from = vec![pl(&[(10, 5), (19, 5)])];
        merge_fragments(&mut into, from, vseam(10));
        assert_eq!(into.len(), 1);
        // No coincident point, so nothing is dropped
        assert_eq!(
            into[0].points(),
            pl(&[(0, 5), (9, 5), (10, 5), (19, 5)]).points()
        );
    }

    #[test]
    fn test_incoming_end_must_be_exact() {
        // Incoming fragment is one pixel off the seam: no merge
        let mut into = vec![pl(&[(0, 5), (10, 5)])];
        let from = vec![pl(&[(11, 5), (19, 5)])];
        merge_fragments(&mut into, from, vseam(10));
        assert_eq!(into.len(), 2);
    }

    #[test]
    fn test_continuity_threshold() {
        // Perpendicular offset of 4 is already too far
        let mut into = vec![pl(&[(0, 0), (10, 0)])];
        let from = vec![pl(&[(10, 4), (19, 4)])];
        merge_fragments(&mut into, from, vseam(10));
        assert_eq!(into.len(), 2);

        // Offset of 3 still merges
        let mut into = vec![pl(&[(0, 0), (10, 0)])];
        let from = vec![pl(&[(10, 3), (19, 3)])];
        merge_fragments(&mut into, from, vseam(10));
        assert_eq!(into.len(), 1);
    }

    #[test]
    fn test_head_head_reverses_incoming() {
        // Both fragments start at the seam
        let mut into = vec![pl(&[(10, 5), (0, 5)])];
        let from = vec![pl(&[(10, 5), (19, 5)])];
        merge_fragments(&mut into, from, vseam(10));
        assert_eq!(into.len(), 1);
        assert_eq!(into[0].points(), pl(&[(19, 5), (10, 5), (0, 5)]).points());
    }

    #[test]
    fn test_nearest_candidate_wins() {
        let mut into = vec![pl(&[(0, 0), (10, 0)]), pl(&[(0, 2), (10, 2)])];
        let from = vec![pl(&[(10, 2), (19, 2)])];
        merge_fragments(&mut into, from, vseam(10));
        assert_eq!(into.len(), 2);
        assert_eq!(into[1].points(), pl(&[(0, 2), (10, 2), (19, 2)]).points());
        assert_eq!(into[0].points(), pl(&[(0, 0), (10, 0)]).points());
    }

    #[test]
    fn test_merge_determinism() {
        let build_into = || {
            vec![
                pl(&[(0, 0), (10, 1)]),
                pl(&[(0, 2), (10, 2)]),
                pl(&[(0, 9), (10, 8)]),
            ]
        };
        let build_from = || {
            vec![
                pl(&[(10, 2), (19, 2)]),
                pl(&[(10, 1), (19, 0)]),
                pl(&[(10, 8), (19, 9)]),
            ]
        };
        let mut a = build_into();
        merge_fragments(&mut a, build_from(), vseam(10));
        let mut b = build_into();
        merge_fragments(&mut b, build_from(), vseam(10));
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_unmatched_fragments_appended() {
        let mut into: Vec<Polyline> = Vec::new();
        let from = vec![pl(&[(10, 0), (19, 0)]), pl(&[(10, 5), (19, 5)])];
        merge_fragments(&mut into, from, vseam(10));
        assert_eq!(into.len(), 2);
    }

    #[test]
    fn test_horizontal_seam_compares_rows() {
        let seam = Seam {
            orientation: SeamOrientation::Horizontal,
            coord: 7,
        };
        let mut into = vec![pl(&[(3, 0), (3, 7)])];
        let from = vec![pl(&[(3, 7), (3, 14)])];
        merge_fragments(&mut into, from, seam);
        assert_eq!(into.len(), 1);
        assert_eq!(into[0].points(), pl(&[(3, 0), (3, 7), (3, 14)]).points());
    }
}
