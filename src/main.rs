use lane_detector::image::default_roi_mask;
use lane_detector::{LaneDetector, LaneGeometry, LaneParams, LineSegment};

fn main() {
    // Demo stub: two synthetic lane markings on a 960x540 frame
    let (w, h) = (960usize, 540usize);
    let mask = default_roi_mask(w, h);
    let segments = [
        LineSegment::new(150, 539, 420, 330),
        LineSegment::new(830, 539, 560, 330),
        LineSegment::new(300, 500, 600, 500),
    ];

    let det = LaneDetector::new(LaneParams::default());
    let report = det.process_with_diagnostics(&segments, &mask, &LaneGeometry::for_frame(w, h));
    println!("{}", report.trace.summary());
    println!(
        "lanes_found={} latency_ms={:.3}",
        report.lanes.found(),
        report.trace.timings.total_ms
    );
}
