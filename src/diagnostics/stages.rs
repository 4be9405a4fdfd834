use crate::interpolate::{Interpolation, LineDecision};
use crate::signals::{Classification, DominantSummary, SegmentDecision, SegmentVerdict};
use crate::slope::{SlopeEstimate, SlopeStats};
use crate::types::LanePolygons;
use serde::Serialize;

/// Signal classification summary with one decision per input segment.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationStage {
    pub elapsed_ms: f64,
    pub total: usize,
    pub kept: usize,
    pub degenerate: usize,
    pub out_of_region: usize,
    pub zero_slope: usize,
    pub dominant: DominantSummary,
    /// `(max_slope + min_slope) / 2` over the dominant candidates.
    pub rough_mean_slope: f64,
    pub decisions: Vec<SegmentDecision>,
}

impl ClassificationStage {
    pub fn from_classification(out: &Classification, elapsed_ms: f64) -> Self {
        Self {
            elapsed_ms,
            total: out.decisions.len(),
            kept: out.signals.len(),
            degenerate: out.count(SegmentVerdict::Degenerate),
            out_of_region: out.count(SegmentVerdict::OutOfRegion),
            zero_slope: out.count(SegmentVerdict::ZeroSlope),
            dominant: out.dominant,
            rough_mean_slope: out.mean_slope(),
            decisions: out.decisions.clone(),
        }
    }
}

/// Dominant slope estimate and the per-side statistics behind it.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlopeStage {
    pub elapsed_ms: f64,
    pub stats: SlopeStats,
    /// Slope the interpolator centres its acceptance band on.
    pub mean_slope: f64,
    /// True when the classifier's rough estimate was used unchanged.
    pub used_default: bool,
}

impl SlopeStage {
    pub fn from_estimate(est: &SlopeEstimate, elapsed_ms: f64) -> Self {
        Self {
            elapsed_ms,
            stats: est.stats,
            mean_slope: est.mean_slope,
            used_default: est.used_default,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpolationStage {
    pub elapsed_ms: f64,
    pub slope_variance: f64,
    pub accepted: usize,
    pub outside_band: usize,
    pub out_of_frame: usize,
    pub decisions: Vec<LineDecision>,
}

impl InterpolationStage {
    pub fn from_interpolation(out: &Interpolation, slope_variance: f64, elapsed_ms: f64) -> Self {
        Self {
            elapsed_ms,
            slope_variance,
            accepted: out.accepted(),
            outside_band: out.outside_band(),
            out_of_frame: out.out_of_frame(),
            decisions: out.decisions.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonStage {
    pub elapsed_ms: f64,
    pub left_lines: usize,
    pub right_lines: usize,
    pub lanes_found: usize,
}

impl PolygonStage {
    pub fn new(out: &Interpolation, polygons: &LanePolygons, elapsed_ms: f64) -> Self {
        let right_lines = out.lines.iter().filter(|l| l.slope < 0.0).count();
        Self {
            elapsed_ms,
            left_lines: out.lines.len() - right_lines,
            right_lines,
            lanes_found: polygons.found(),
        }
    }
}
