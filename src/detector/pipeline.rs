//! Lane detector orchestrating the per-frame pipeline.
//!
//! Stages
//! - Classify: raw segments → signals (degenerate / out-of-region rejection)
//!   and the rough dominant slope.
//! - Slope: per-side statistics and the dominant slope, seeded with the rough
//!   estimate when no side has usable slopes.
//! - Interpolate: accept signals in the slope band and extend them across
//!   `[upper_bound, lower_bound]`.
//! - Polygons: average each side and widen into a trapezoid.
//!
//! The detector holds only its parameters, so one instance can serve many
//! frames concurrently.
//!
//! ```no_run
//! use lane_detector::{LaneDetector, LaneGeometry, LaneParams, LineSegment};
//! use lane_detector::image::UnmaskedRegion;
//!
//! let detector = LaneDetector::new(LaneParams::default());
//! let segments = [LineSegment::new(0, 400, 100, 300)];
//! let lanes = detector.process(
//!     &segments,
//!     &UnmaskedRegion::new(801, 401),
//!     &LaneGeometry::new(400, 200, 800),
//! );
//! println!("lanes found: {}", lanes.found());
//! ```

use super::params::LaneParams;
use crate::diagnostics::{
    ClassificationStage, DetectionReport, InputDescriptor, InterpolationStage, PipelineTrace,
    PolygonStage, SlopeStage, TimingBreakdown,
};
use crate::image::RegionMask;
use crate::interpolate::{interpolate_lines, Interpolation};
use crate::polygon::build_polygons;
use crate::signals::{classify_signals, Classification};
use crate::slope::{estimate_slope, SlopeEstimate};
use crate::types::{LaneGeometry, LanePolygons, LineSegment};
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// One frame's worth of pipeline input.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput<'a, M: ?Sized> {
    pub segments: &'a [LineSegment],
    pub mask: &'a M,
    pub geometry: LaneGeometry,
}

/// Straight-lane detector over Hough segments.
#[derive(Clone, Debug, Default)]
pub struct LaneDetector {
    params: LaneParams,
}

struct StageOutputs {
    classification: Classification,
    estimate: SlopeEstimate,
    interpolation: Interpolation,
    lanes: LanePolygons,
    timings: [f64; 4],
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

impl LaneDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: LaneParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LaneParams {
        &self.params
    }

    /// Run the pipeline on one frame and return only the polygons.
    pub fn process<M: RegionMask + ?Sized>(
        &self,
        segments: &[LineSegment],
        mask: &M,
        geometry: &LaneGeometry,
    ) -> LanePolygons {
        self.run(segments, mask, geometry).lanes
    }

    /// Run the pipeline on one frame and capture per-stage diagnostics.
    pub fn process_with_diagnostics<M: RegionMask + ?Sized>(
        &self,
        segments: &[LineSegment],
        mask: &M,
        geometry: &LaneGeometry,
    ) -> DetectionReport {
        let total_start = Instant::now();
        let StageOutputs {
            classification,
            estimate,
            interpolation,
            lanes,
            timings: [classify_ms, slope_ms, interpolate_ms, polygon_ms],
        } = self.run(segments, mask, geometry);

        let mut timings = TimingBreakdown::with_total(elapsed_ms(total_start));
        timings.push("classify", classify_ms);
        timings.push("slope", slope_ms);
        timings.push("interpolate", interpolate_ms);
        timings.push("polygons", polygon_ms);

        let trace = PipelineTrace {
            input: InputDescriptor {
                segments: segments.len(),
                geometry: *geometry,
            },
            timings,
            classification: ClassificationStage::from_classification(&classification, classify_ms),
            slope: SlopeStage::from_estimate(&estimate, slope_ms),
            interpolation: InterpolationStage::from_interpolation(
                &interpolation,
                self.params.slope_variance,
                interpolate_ms,
            ),
            polygons: PolygonStage::new(&interpolation, &lanes, polygon_ms),
            lines: interpolation.lines,
        };
        DetectionReport { lanes, trace }
    }

    /// Process independent frames in parallel.
    pub fn process_batch<M: RegionMask + Sync + ?Sized>(
        &self,
        frames: &[FrameInput<'_, M>],
    ) -> Vec<LanePolygons> {
        frames
            .par_iter()
            .map(|f| self.process(f.segments, f.mask, &f.geometry))
            .collect()
    }

    fn run<M: RegionMask + ?Sized>(
        &self,
        segments: &[LineSegment],
        mask: &M,
        geometry: &LaneGeometry,
    ) -> StageOutputs {
        let params = &self.params;

        let start = Instant::now();
        let classification = classify_signals(segments, mask, &params.signals);
        let classify_ms = elapsed_ms(start);

        let start = Instant::now();
        let estimate = estimate_slope(
            &classification.signals,
            params.signals.slope_thresh,
            classification.mean_slope(),
        );
        let slope_ms = elapsed_ms(start);

        let start = Instant::now();
        let interpolation = interpolate_lines(
            &classification.signals,
            estimate.mean_slope,
            geometry,
            params.slope_variance,
        );
        let interpolate_ms = elapsed_ms(start);

        let start = Instant::now();
        let lanes = build_polygons(
            &interpolation.lines,
            geometry,
            params.polygon.lower_x_offset,
            params.polygon.upper_x_offset,
        );
        let polygon_ms = elapsed_ms(start);

        if lanes.is_empty() {
            debug!(
                "LaneDetector::process no lane found ({} segments, {} signals)",
                segments.len(),
                classification.signals.len()
            );
        }

        StageOutputs {
            classification,
            estimate,
            interpolation,
            lanes,
            timings: [classify_ms, slope_ms, interpolate_ms, polygon_ms],
        }
    }
}
