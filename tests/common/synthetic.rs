use lane_detector::image::GrayImageU8;
use lane_detector::LineSegment;
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::Config as ProptestConfig;

/// Mask with every pixel inside the region.
pub fn full_mask(width: usize, height: usize) -> GrayImageU8 {
    GrayImageU8::new(width, height, vec![255u8; width * height])
}

/// Proptest settings: `PROPTEST_CASES` overrides the default case count.
pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

/// Segment with endpoints anywhere in a `width x height` frame widened by a
/// quarter on each side, including axis-aligned ones.
pub fn arb_segment(width: i32, height: i32) -> BoxedStrategy<LineSegment> {
    let xs = -width / 4..width + width / 4;
    let ys = 0..height;
    prop_oneof![
        6 => (xs.clone(), ys.clone(), xs.clone(), ys.clone())
            .prop_map(|(x1, y1, x2, y2)| LineSegment::new(x1, y1, x2, y2)),
        1 => (xs.clone(), ys.clone(), ys.clone())
            .prop_map(|(x, y1, y2)| LineSegment::new(x, y1, x, y2)),
        1 => (xs.clone(), xs, ys).prop_map(|(x1, x2, y)| LineSegment::new(x1, y, x2, y)),
    ]
    .boxed()
}

/// Up to `max_count` segments from [`arb_segment`].
pub fn arb_segments(width: i32, height: i32, max_count: usize) -> BoxedStrategy<Vec<LineSegment>> {
    proptest::collection::vec(arb_segment(width, height), 0..=max_count).boxed()
}

/// Two straight lane markings converging towards the frame centre, each
/// broken into dashes.
pub fn dashed_lanes(width: i32, height: i32) -> Vec<LineSegment> {
    let bottom = height - 1;
    let top = height / 2 + 20;
    let left = (width / 8, bottom, width / 2 - 40, top);
    let right = (width - width / 8, bottom, width / 2 + 40, top);
    let mut segs = Vec::new();
    for (x1, y1, x2, y2) in [left, right] {
        for k in 0..3 {
            let t0 = k as f32 / 3.0;
            let t1 = t0 + 0.25;
            let lerp = |a: i32, b: i32, t: f32| (a as f32 + (b - a) as f32 * t).round() as i32;
            segs.push(LineSegment::new(
                lerp(x1, x2, t0),
                lerp(y1, y2, t0),
                lerp(x1, x2, t1),
                lerp(y1, y2, t1),
            ));
        }
    }
    segs
}
