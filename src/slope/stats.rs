use crate::error::LaneError;
use crate::signals::Signal;
use crate::types::LaneSide;
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};

/// Descriptive statistics over the slopes of one lane side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Population variance (mean squared deviation), not its square root.
    pub variance: f64,
}

impl SideStats {
    pub fn from_slopes(slopes: &[f64]) -> Result<Self, LaneError> {
        if slopes.is_empty() {
            return Err(LaneError::EmptyAggregation { what: "slopes" });
        }
        let n = slopes.len() as f64;
        let mean = slopes.iter().sum::<f64>() / n;
        let variance = slopes.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        let (min, max) = slopes
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| {
                (lo.min(s), hi.max(s))
            });
        Ok(Self {
            count: slopes.len(),
            min,
            max,
            mean,
            variance,
        })
    }
}

/// Slopes split by lane side; near-horizontal slopes are counted, not kept.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlopePartition {
    pub left: Vec<f64>,
    pub right: Vec<f64>,
    pub discarded: usize,
}

impl SlopePartition {
    pub fn side(&self, side: LaneSide) -> &[f64] {
        match side {
            LaneSide::Left => &self.left,
            LaneSide::Right => &self.right,
        }
    }
}

/// Per-side statistics. A side without slopes has no entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlopeStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<SideStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<SideStats>,
    /// Signals dropped for |slope| at or below the threshold.
    pub discarded: usize,
}

impl SlopeStats {
    pub fn side(&self, side: LaneSide) -> Option<&SideStats> {
        match side {
            LaneSide::Left => self.left.as_ref(),
            LaneSide::Right => self.right.as_ref(),
        }
    }

    /// Present sides, left first.
    pub fn iter(&self) -> impl Iterator<Item = (LaneSide, &SideStats)> {
        [
            (LaneSide::Left, self.left.as_ref()),
            (LaneSide::Right, self.right.as_ref()),
        ]
        .into_iter()
        .filter_map(|(side, stats)| stats.map(|s| (side, s)))
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Split signal slopes by sign, dropping those with `|slope| <= slope_thresh`.
pub fn partition_slopes(signals: &[Signal], slope_thresh: f64) -> SlopePartition {
    let mut part = SlopePartition::default();
    for signal in signals {
        if signal.abs_slope() > slope_thresh {
            match signal.side() {
                LaneSide::Left => part.left.push(signal.slope),
                LaneSide::Right => part.right.push(signal.slope),
            }
        } else {
            warn!(
                "throwing out signal {:?}: slope={:.3} magnitude={:.1}",
                signal.id, signal.slope, signal.magnitude
            );
            part.discarded += 1;
        }
    }
    part
}

/// Partition the signals and compute statistics for every non-empty side.
pub fn slope_statistics(signals: &[Signal], slope_thresh: f64) -> SlopeStats {
    let part = partition_slopes(signals, slope_thresh);
    let stats_for = |side: LaneSide| {
        let slopes = part.side(side);
        if slopes.is_empty() {
            debug!("no {} slopes in input", side.label());
            return None;
        }
        match SideStats::from_slopes(slopes) {
            Ok(stats) => Some(stats),
            Err(err) => {
                error!("{} slopes: {err}", side.label());
                None
            }
        }
    };
    SlopeStats {
        left: stats_for(LaneSide::Left),
        right: stats_for(LaneSide::Right),
        discarded: part.discarded,
    }
}
