#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod types;

// Stage modules – public so tools and tests can run stages in isolation.
pub mod interpolate;
pub mod polygon;
pub mod signals;
pub mod slope;

pub mod config;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{FrameInput, LaneDetector, LaneParams};
pub use crate::error::LaneError;
pub use crate::types::{LaneGeometry, LanePolygon, LanePolygons, LaneSide, LineSegment};

// Diagnostics returned by the detector.
pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lane_detector::prelude::*;
///
/// # fn main() {
/// let (w, h) = (960usize, 540usize);
/// let mask = vec![255u8; w * h];
/// let roi = ImageU8 { w, h, stride: w, data: &mask };
///
/// let det = LaneDetector::new(LaneParams::default());
/// let segments = [LineSegment::new(150, 539, 420, 330)];
/// let lanes = det.process(&segments, &roi, &LaneGeometry::for_frame(w, h));
/// println!("lanes_found={}", lanes.found());
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageU8, RegionMask};
    pub use crate::{LaneDetector, LaneGeometry, LaneParams, LanePolygons, LineSegment};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::interpolate::{interpolate_lines, InterpolatedLine, Interpolation};
    pub use crate::polygon::{build_polygons, point_stats};
    pub use crate::signals::{classify_signals, Classification, Signal, SignalId};
    pub use crate::slope::{estimate_mean_slope, slope_statistics, SlopeStats};
}
