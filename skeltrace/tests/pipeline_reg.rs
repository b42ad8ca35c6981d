//! Umbrella pipeline regression test
//!
//! Runs the whole library surface as a user would: build a thick-stroked
//! bitmap from ASCII art, thin it to a skeleton, trace the skeleton into
//! polylines, and check the result is the stroke's centerline.
//!
//! Run with:
//! ```
//! cargo test -p skeltrace --test pipeline_reg
//! ```

use skeltrace::{Point, thin, trace};
use skeltrace_test::{bitmap_from_ascii, bitmap_to_ascii, count_components_8};

#[test]
fn pipeline_reg() {
    // A 3-px-thick bar spanning the full grid width at rows 3..=5
    let pixs = bitmap_from_ascii(
        "........................\n\
         ........................\n\
         ........................\n\
         ########################\n\
         ########################\n\
         ########################\n\
         ........................\n\
         ........................\n\
         ........................",
    )
    .unwrap();
    eprintln!("Input:\n{}", bitmap_to_ascii(&pixs));

    let skel = thin::thin(&pixs, thin::ThinBackend::ZhangSuen).unwrap();
    eprintln!("Skeleton:\n{}", bitmap_to_ascii(&skel));
    assert!(skel.count_foreground() > 0);
    assert!(skel.count_foreground() < pixs.count_foreground());
    assert_eq!(count_components_8(&skel), 1, "bar split during thinning");
    // The medial row survives intact
    for x in 0..24 {
        assert_eq!(skel.get(x, 4), Some(1), "centerline broken at x={x}");
    }

    let traced = trace::trace_skeleton(&skel, &trace::TraceOptions::default()).unwrap();
    eprintln!("Traced {} polyline(s)", traced.polylines.len());
    assert_eq!(traced.polylines.len(), 1);

    let line = &traced.polylines[0];
    assert!(line.len() >= 2);
    for p in line.iter() {
        assert_eq!(p.y, 4, "point {:?} off the centerline", p);
    }
    let mut ends = [line.first().unwrap(), line.last().unwrap()];
    ends.sort_by_key(|p| p.x);
    assert_eq!(ends, [Point::new(0, 4), Point::new(23, 4)]);
}
