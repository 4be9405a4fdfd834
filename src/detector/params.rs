//! Parameter types configuring the lane pipeline.
//!
//! Defaults follow the tuning used for 960x540 dash-camera frames after a
//! Canny + probabilistic Hough front end. For other resolutions start with
//! `magnitude_thresh` and the polygon offsets, which are in pixels.

use serde::{Deserialize, Serialize};

/// Minimum |slope| for a line to count as lane-like.
pub const SLOPE_THRESHOLD: f64 = 0.08;
/// Maximum |slope| for a line to seed the dominant slope.
pub const SLOPE_MAX_CUTOFF: f64 = 0.9;
/// Acceptance half-width around the dominant slope.
pub const SLOPE_VARIANCE: f64 = 0.25;
/// Minimum segment length (pixels) for a line to seed the dominant slope.
pub const MAGNITUDE_THRESH: f64 = 100.0;
/// Polygon half-width on the lower edge (pixels).
pub const LOWER_X_OFFSET: i32 = 5;
/// Polygon half-width on the upper edge (pixels).
pub const UPPER_X_OFFSET: i32 = 10;

/// Pipeline-wide parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneParams {
    /// Classifier thresholds; `slope_thresh` also gates the slope statistics.
    pub signals: SignalParams,
    /// Acceptance half-width around the estimated dominant slope.
    pub slope_variance: f64,
    /// Widening applied when building polygons.
    pub polygon: PolygonParams,
}

impl Default for LaneParams {
    fn default() -> Self {
        Self {
            signals: SignalParams::default(),
            slope_variance: SLOPE_VARIANCE,
            polygon: PolygonParams::default(),
        }
    }
}

/// Thresholds used by the signal classifier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalParams {
    /// Lines with |slope| at or below this are near-horizontal noise.
    pub slope_thresh: f64,
    /// Lines with |slope| at or above this never seed the dominant slope.
    pub slope_max_cutoff: f64,
    /// Minimum length for a line to seed the dominant slope.
    pub magnitude_thresh: f64,
}

impl Default for SignalParams {
    fn default() -> Self {
        Self {
            slope_thresh: SLOPE_THRESHOLD,
            slope_max_cutoff: SLOPE_MAX_CUTOFF,
            magnitude_thresh: MAGNITUDE_THRESH,
        }
    }
}

/// Half-widths of the emitted lane polygons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolygonParams {
    pub lower_x_offset: i32,
    pub upper_x_offset: i32,
}

impl Default for PolygonParams {
    fn default() -> Self {
        Self {
            lower_x_offset: LOWER_X_OFFSET,
            upper_x_offset: UPPER_X_OFFSET,
        }
    }
}
