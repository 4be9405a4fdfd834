use super::{
    ClassificationStage, InterpolationStage, PolygonStage, SlopeStage, TimingBreakdown,
};
use crate::interpolate::InterpolatedLine;
use crate::types::{LaneGeometry, LanePolygons};
use serde::Serialize;

/// Result produced by [`LaneDetector::process_with_diagnostics`](crate::LaneDetector).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub lanes: LanePolygons,
    pub trace: PipelineTrace,
}

/// End-to-end trace of one frame through the pipeline.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub classification: ClassificationStage,
    pub slope: SlopeStage,
    pub interpolation: InterpolationStage,
    pub polygons: PolygonStage,
    /// Lines that contributed to the polygons.
    pub lines: Vec<InterpolatedLine>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub segments: usize,
    pub geometry: LaneGeometry,
}

impl PipelineTrace {
    /// One-line human readable summary.
    pub fn summary(&self) -> String {
        format!(
            "segments={} signals={} mean_slope={:.3} accepted={} left_lines={} right_lines={} total_ms={:.3}",
            self.input.segments,
            self.classification.kept,
            self.slope.mean_slope,
            self.interpolation.accepted,
            self.polygons.left_lines,
            self.polygons.right_lines,
            self.timings.total_ms
        )
    }
}
