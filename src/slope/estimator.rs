use super::stats::{slope_statistics, SlopeStats};
use crate::signals::Signal;

/// Dominant slope magnitude together with the statistics it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlopeEstimate {
    pub mean_slope: f64,
    pub stats: SlopeStats,
    /// True when no side had statistics and the seed value was returned.
    pub used_default: bool,
}

/// Average the absolute mean slope over the sides present, or fall back to
/// `default` when neither side has usable signals.
pub fn estimate_slope(signals: &[Signal], slope_thresh: f64, default: f64) -> SlopeEstimate {
    let stats = slope_statistics(signals, slope_thresh);
    let (sum, count) = stats
        .iter()
        .fold((0.0f64, 0usize), |(sum, n), (_, s)| (sum + s.mean.abs(), n + 1));
    if count == 0 {
        return SlopeEstimate {
            mean_slope: default,
            stats,
            used_default: true,
        };
    }
    SlopeEstimate {
        mean_slope: sum / count as f64,
        stats,
        used_default: false,
    }
}

/// Scalar form of [`estimate_slope`].
pub fn estimate_mean_slope(signals: &[Signal], slope_thresh: f64, default: f64) -> f64 {
    estimate_slope(signals, slope_thresh, default).mean_slope
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::SignalId;
    use crate::types::LineSegment;

    fn signal(id: u32, seg: [i32; 4]) -> Signal {
        Signal::from_segment(SignalId(id), &LineSegment::from(seg)).unwrap()
    }

    #[test]
    fn averages_absolute_side_means() {
        let signals = [
            signal(0, [0, 0, 100, 50]),  // +0.5
            signal(1, [0, 0, 100, 100]), // +1.0  -> left mean 0.75
            signal(2, [0, 100, 50, 0]),  // -2.0  -> right mean -2.0
        ];
        let est = estimate_slope(&signals, 0.08, 0.3);
        assert!(!est.used_default);
        assert!((est.mean_slope - 1.375).abs() < 1e-6);
    }

    #[test]
    fn single_side_uses_its_mean() {
        let signals = [signal(0, [0, 400, 100, 300])];
        assert_eq!(estimate_mean_slope(&signals, 0.4, 0.0), 1.0);
    }

    #[test]
    fn falls_back_to_seed_without_stats() {
        let signals = [signal(0, [0, 0, 100, 5])];
        let est = estimate_slope(&signals, 0.08, 0.42);
        assert!(est.used_default);
        assert_eq!(est.mean_slope, 0.42);
        assert_eq!(estimate_mean_slope(&[], 0.08, 0.7), 0.7);
    }
}
