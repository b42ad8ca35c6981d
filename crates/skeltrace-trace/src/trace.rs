//! Skeleton tracing - the recursive orchestrator
//!
//! Converts a thinned bitmap into polylines:
//!
//! 1. if the region fits within the chunk floor, extract its fragments
//!    directly ([`chunk_fragments`](crate::chunk_fragments));
//! 2. otherwise find the cheapest seam, split, recurse into both halves
//!    (skipping a half with no foreground), and stitch the second
//!    half's fragments into the first's across the seam;
//! 3. if no valid seam exists, fall back to direct extraction even
//!    though the region exceeds the chunk floor.
//!
//! Recursion depth is capped: an exhausted branch contributes nothing,
//! but results accumulated from completed sibling branches are still
//! returned rather than erroring out.

use crate::chunk::chunk_fragments;
use crate::error::{TraceError, TraceResult};
use crate::merge::merge_fragments;
use crate::seam::find_seam;
use skeltrace_core::{Bitmap, Polyline, Region};

/// Options controlling a trace.
#[derive(Debug, Clone)]
pub struct TraceOptions {
    /// Recursion floor: a region no wider and no taller than this is
    /// analyzed directly instead of being split further.
    pub chunk_size: u32,

    /// Hard cap on recursion depth, guaranteeing termination on
    /// pathological inputs. The default is effectively unbounded for
    /// any realistic image.
    pub max_depth: u32,

    /// Record every region visited during recursion (for diagnostics
    /// and visualization).
    pub collect_regions: bool,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            chunk_size: 10,
            max_depth: 999,
            collect_regions: false,
        }
    }
}

/// The result of a trace.
#[derive(Debug, Clone, Default)]
pub struct Traced {
    /// The traced polylines, in no particular order.
    pub polylines: Vec<Polyline>,

    /// Regions visited during recursion; populated only when
    /// [`TraceOptions::collect_regions`] is set.
    pub regions: Vec<Region>,
}

/// Trace a thinned bitmap into polylines.
///
/// The input is expected to be a skeleton (see `skeltrace-thin`);
/// tracing a thick-stroked bitmap produces fragments hugging the stroke
/// boundaries instead of centerlines.
///
/// # Errors
///
/// Returns [`TraceError::InvalidParameters`] if `options.chunk_size`
/// is zero.
pub fn trace_skeleton(im: &Bitmap, options: &TraceOptions) -> TraceResult<Traced> {
    if options.chunk_size == 0 {
        return Err(TraceError::InvalidParameters(
            "chunk_size must be positive".into(),
        ));
    }

    let mut traced = Traced::default();
    if im.is_blank() {
        return Ok(traced);
    }

    let mut visited = options.collect_regions.then(Vec::new);
    traced.polylines = trace_region(
        im,
        im.full_region(),
        options.chunk_size as i32,
        options.max_depth,
        visited.as_mut(),
    );
    if let Some(regions) = visited {
        traced.regions = regions;
    }
    Ok(traced)
}

/// Recursively trace one region.
fn trace_region(
    im: &Bitmap,
    region: Region,
    chunk_size: i32,
    depth_left: u32,
    mut visited: Option<&mut Vec<Region>>,
) -> Vec<Polyline> {
    if let Some(v) = visited.as_deref_mut() {
        v.push(region);
    }
    if depth_left == 0 {
        return Vec::new();
    }
    if region.w <= chunk_size && region.h <= chunk_size {
        return chunk_fragments(im, region);
    }

    let Some(seam) = find_seam(im, region, chunk_size) else {
        // Irreducible region: treat it as one oversized chunk.
        return chunk_fragments(im, region);
    };

    let (first, second) = seam.split(region);
    let mut frags = Vec::new();
    if im.region_has_foreground(first) {
        frags = trace_region(im, first, chunk_size, depth_left - 1, visited.as_deref_mut());
    }
    if im.region_has_foreground(second) {
        let other = trace_region(im, second, chunk_size, depth_left - 1, visited.as_deref_mut());
        merge_fragments(&mut frags, other, seam);
    }
    frags
}
