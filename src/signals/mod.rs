//! Signal classification: raw Hough segments to lane candidates.
//!
//! Every segment receives a verdict:
//!
//! - segments without extent on an axis are `Degenerate` (vertical segments
//!   have no finite slope, horizontal ones a zero slope);
//! - segments with neither endpoint inside the region mask are `OutOfRegion`.
//!   One endpoint inside is enough;
//! - everything else becomes a [`Signal`] carrying `slope`, `offset` and
//!   `magnitude`.
//!
//! Long segments whose |slope| lies in `(slope_thresh, slope_max_cutoff)` are
//! additionally tracked as dominant candidates. They only shape the rough
//! slope estimate in [`DominantSummary`]; membership in the signal list does
//! not depend on dominance.

mod classifier;
mod signal;

pub use classifier::{
    Classification, DominantSummary, SegmentDecision, SegmentVerdict,
};
pub use signal::{Signal, SignalId};

use crate::detector::params::SignalParams;
use crate::image::RegionMask;
use crate::types::LineSegment;

/// Classify one frame's segments against the region mask.
pub fn classify_signals<M: RegionMask + ?Sized>(
    segments: &[LineSegment],
    mask: &M,
    params: &SignalParams,
) -> Classification {
    classifier::SignalClassifier::new(mask, *params).classify(segments)
}
