use super::signal::{Signal, SignalId};
use crate::detector::params::SignalParams;
use crate::image::RegionMask;
use crate::types::LineSegment;
use log::debug;
use serde::{Deserialize, Serialize};

/// Outcome of classifying one raw segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentVerdict {
    /// Stored as a signal.
    Kept,
    /// No extent along x or y.
    Degenerate,
    /// Neither endpoint lies in the region mask.
    OutOfRegion,
    /// Slope evaluated to zero (or non-finite) after division.
    ZeroSlope,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentDecision {
    pub id: SignalId,
    pub verdict: SegmentVerdict,
    /// True when the segment seeded the dominant slope estimate.
    pub dominant: bool,
}

/// Running summary of the dominant candidates: long segments whose |slope|
/// lies strictly inside `(slope_thresh, slope_max_cutoff)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DominantSummary {
    pub count: usize,
    /// Smallest |slope| among the candidates, `0.0` when there are none.
    pub min_slope: f64,
    /// |slope| of the longest candidate, `0.0` when there are none.
    pub max_slope: f64,
    /// Length of the longest candidate.
    pub max_magnitude: f64,
}

impl DominantSummary {
    fn observe(&mut self, abs_slope: f64, magnitude: f64) {
        self.min_slope = if self.count == 0 {
            abs_slope
        } else {
            self.min_slope.min(abs_slope)
        };
        if magnitude > self.max_magnitude {
            self.max_slope = abs_slope;
            self.max_magnitude = magnitude;
        }
        self.count += 1;
    }

    /// Rough slope estimate `(max_slope + min_slope) / 2`.
    pub fn mean_slope(&self) -> f64 {
        (self.max_slope + self.min_slope) / 2.0
    }
}

/// Output of [`classify_signals`].
#[derive(Clone, Debug, Default)]
pub struct Classification {
    /// Accepted signals, in input order.
    pub signals: Vec<Signal>,
    /// One decision per input segment, in input order.
    pub decisions: Vec<SegmentDecision>,
    pub dominant: DominantSummary,
}

impl Classification {
    /// The classifier's own slope estimate, refined later by the slope stage.
    pub fn mean_slope(&self) -> f64 {
        self.dominant.mean_slope()
    }

    pub fn count(&self, verdict: SegmentVerdict) -> usize {
        self.decisions.iter().filter(|d| d.verdict == verdict).count()
    }
}

pub(crate) struct SignalClassifier<'a, M: RegionMask + ?Sized> {
    mask: &'a M,
    params: SignalParams,
}

impl<'a, M: RegionMask + ?Sized> SignalClassifier<'a, M> {
    pub fn new(mask: &'a M, params: SignalParams) -> Self {
        Self { mask, params }
    }

    pub fn classify(&self, segments: &[LineSegment]) -> Classification {
        let mut out = Classification {
            signals: Vec::with_capacity(segments.len()),
            decisions: Vec::with_capacity(segments.len()),
            dominant: DominantSummary::default(),
        };
        for (idx, seg) in segments.iter().enumerate() {
            let id = SignalId(idx as u32);
            let (verdict, dominant) = self.classify_one(id, seg, &mut out);
            out.decisions.push(SegmentDecision {
                id,
                verdict,
                dominant,
            });
        }
        debug!(
            "classified {} segments -> {} signals, mean_slope={:.3} (max={:.3}, min={:.3}, max_magnitude={:.1})",
            segments.len(),
            out.signals.len(),
            out.mean_slope(),
            out.dominant.max_slope,
            out.dominant.min_slope,
            out.dominant.max_magnitude
        );
        out
    }

    fn classify_one(
        &self,
        id: SignalId,
        seg: &LineSegment,
        out: &mut Classification,
    ) -> (SegmentVerdict, bool) {
        if seg.is_axis_degenerate() {
            debug!("disregarding degenerate segment {:?}", seg);
            return (SegmentVerdict::Degenerate, false);
        }
        if !self.mask.contains_any(&[seg.p1(), seg.p2()]) {
            debug!("segment {:?} outside region of interest", seg);
            return (SegmentVerdict::OutOfRegion, false);
        }
        let Some(signal) = Signal::from_segment(id, seg) else {
            debug!("segment {:?} has zero slope", seg);
            return (SegmentVerdict::ZeroSlope, false);
        };

        let abs_slope = signal.abs_slope();
        let dominant = signal.magnitude > self.params.magnitude_thresh
            && abs_slope > self.params.slope_thresh
            && abs_slope < self.params.slope_max_cutoff;
        if dominant {
            debug!(
                "dominant {:?}: slope={:6.3} magnitude={:6.3}",
                seg, signal.slope, signal.magnitude
            );
            out.dominant.observe(abs_slope, signal.magnitude);
        }
        out.signals.push(signal);
        (SegmentVerdict::Kept, dominant)
    }
}
