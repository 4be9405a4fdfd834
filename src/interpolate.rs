//! Extrapolation of accepted signals across the lane band.
//!
//! A signal is accepted when its |slope| lies strictly within `slope_variance`
//! of the dominant slope. Accepted signals are extended to the rows
//! `lower_bound` and `upper_bound`; if either new column falls outside
//! `[0, horizontal_limit]` the line is dropped. Columns are never clamped,
//! which would tilt the lane.
use crate::signals::{Signal, SignalId};
use crate::types::{LaneGeometry, LaneSide};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Signal extended to the lane band: `p1` lies on `lower_bound`, `p2` on
/// `upper_bound`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterpolatedLine {
    pub id: SignalId,
    pub slope: f64,
    pub offset: f64,
    pub p1: [i32; 2],
    pub p2: [i32; 2],
}

impl InterpolatedLine {
    #[inline]
    pub fn side(&self) -> LaneSide {
        LaneSide::from_slope(self.slope)
    }
}

/// Outcome of interpolating one signal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "verdict")]
pub enum LineVerdict {
    Accepted,
    ZeroSlope,
    /// `| |slope| - mean_slope |` reached the acceptance half-width.
    OutsideBand { delta: f64 },
    /// An extrapolated endpoint left the frame horizontally.
    OutOfFrame { x: i32, y: i32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDecision {
    pub id: SignalId,
    #[serde(flatten)]
    pub verdict: LineVerdict,
}

/// Output of [`interpolate_lines`].
#[derive(Clone, Debug, Default)]
pub struct Interpolation {
    /// Accepted lines, in signal order.
    pub lines: Vec<InterpolatedLine>,
    pub decisions: Vec<LineDecision>,
}

impl Interpolation {
    pub fn accepted(&self) -> usize {
        self.lines.len()
    }

    pub fn outside_band(&self) -> usize {
        self.decisions
            .iter()
            .filter(|d| matches!(d.verdict, LineVerdict::OutsideBand { .. }))
            .count()
    }

    pub fn out_of_frame(&self) -> usize {
        self.decisions
            .iter()
            .filter(|d| matches!(d.verdict, LineVerdict::OutOfFrame { .. }))
            .count()
    }
}

/// Column of `signal` at row `y`, truncated toward zero. `None` when the
/// value is not finite.
fn column_at(signal: &Signal, y: i32) -> Option<i32> {
    let x = signal.x_at(y as f64);
    x.is_finite().then_some(x as i32)
}

fn interpolate_one(
    signal: &Signal,
    mean_slope: f64,
    geometry: &LaneGeometry,
    slope_variance: f64,
) -> Result<InterpolatedLine, LineVerdict> {
    if signal.slope == 0.0 {
        return Err(LineVerdict::ZeroSlope);
    }
    let delta = (signal.abs_slope() - mean_slope).abs();
    if !(delta < slope_variance) {
        debug!("line {:?} outside slope band (delta {delta:.3})", signal.id);
        return Err(LineVerdict::OutsideBand { delta });
    }

    let mut ends = [[0i32; 2]; 2];
    for (end, y) in ends
        .iter_mut()
        .zip([geometry.lower_bound, geometry.upper_bound])
    {
        let x = match column_at(signal, y) {
            Some(x) if geometry.contains_x(x) => x,
            Some(x) => {
                if x < 0 {
                    warn!("line {:?} extends too far left, throwing out ({x}, {y})", signal.id);
                } else {
                    warn!("line {:?} extends too far right, throwing out ({x}, {y})", signal.id);
                }
                return Err(LineVerdict::OutOfFrame { x, y });
            }
            None => {
                warn!("line {:?} has no finite column at row {y}", signal.id);
                return Err(LineVerdict::OutOfFrame { x: i32::MAX, y });
            }
        };
        *end = [x, y];
    }
    debug!(
        "line {:?}: {:?} -> {:?}, {:?} -> {:?}",
        signal.id, signal.p1, ends[0], signal.p2, ends[1]
    );
    Ok(InterpolatedLine {
        id: signal.id,
        slope: signal.slope,
        offset: signal.offset,
        p1: ends[0],
        p2: ends[1],
    })
}

/// Extend every signal within the acceptance band across the lane band.
pub fn interpolate_lines(
    signals: &[Signal],
    mean_slope: f64,
    geometry: &LaneGeometry,
    slope_variance: f64,
) -> Interpolation {
    let mut out = Interpolation {
        lines: Vec::with_capacity(signals.len()),
        decisions: Vec::with_capacity(signals.len()),
    };
    for signal in signals {
        let verdict = match interpolate_one(signal, mean_slope, geometry, slope_variance) {
            Ok(line) => {
                out.lines.push(line);
                LineVerdict::Accepted
            }
            Err(verdict) => verdict,
        };
        out.decisions.push(LineDecision {
            id: signal.id,
            verdict,
        });
    }
    debug!(
        "interpolated {}/{} signals around mean_slope={:.3} (band {:.3})",
        out.lines.len(),
        signals.len(),
        mean_slope,
        slope_variance
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LineSegment;

    fn signal(id: u32, seg: [i32; 4]) -> Signal {
        Signal::from_segment(SignalId(id), &LineSegment::from(seg)).unwrap()
    }

    fn geometry() -> LaneGeometry {
        LaneGeometry::new(400, 200, 800)
    }

    #[test]
    fn extends_accepted_line_to_both_bounds() {
        let out = interpolate_lines(&[signal(7, [0, 400, 100, 300])], 1.0, &geometry(), 0.25);
        assert_eq!(out.accepted(), 1);
        let line = out.lines[0];
        assert_eq!(line.id, SignalId(7));
        assert_eq!(line.p1, [0, 400]);
        assert_eq!(line.p2, [200, 200]);
        assert_eq!(line.slope, -1.0);
        assert_eq!(out.decisions[0].verdict, LineVerdict::Accepted);
    }

    #[test]
    fn band_is_strict() {
        let signals = [
            signal(0, [0, 0, 100, 100]), // |slope| 1.0, delta 0.0
            signal(1, [0, 0, 100, 75]),  // |slope| 0.75, delta 0.25 == band
            signal(2, [0, 0, 100, 50]),  // |slope| 0.5, delta 0.5
        ];
        let g = LaneGeometry::new(400, 200, 10_000);
        let out = interpolate_lines(&signals, 1.0, &g, 0.25);
        let ids: Vec<_> = out.lines.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![SignalId(0)]);
        assert_eq!(out.outside_band(), 2);
        for line in &out.lines {
            assert!((line.slope.abs() - 1.0).abs() < 0.25);
        }
    }

    #[test]
    fn lines_leaving_the_frame_are_dropped_not_clamped() {
        let signals = [
            // x at y=400 is -100
            signal(0, [-100, 400, 0, 300]),
            // x at y=200 is 900 > 800
            signal(1, [700, 400, 800, 300]),
            // fully inside
            signal(2, [300, 400, 400, 300]),
        ];
        let out = interpolate_lines(&signals, 1.0, &geometry(), 0.25);
        assert_eq!(out.accepted(), 1);
        assert_eq!(out.lines[0].id, SignalId(2));
        assert_eq!(out.out_of_frame(), 2);
        assert_eq!(
            out.decisions[0].verdict,
            LineVerdict::OutOfFrame { x: -100, y: 400 }
        );
        assert_eq!(
            out.decisions[1].verdict,
            LineVerdict::OutOfFrame { x: 900, y: 200 }
        );
        for line in &out.lines {
            for p in [line.p1, line.p2] {
                assert!(p[0] >= 0 && p[0] <= 800);
            }
        }
    }

    #[test]
    fn endpoint_rows_map_back_to_their_own_columns() {
        let g = LaneGeometry::new(539, 330, 959);
        for x2 in [1, 27, 53] {
            let s = signal(0, [0, 539, x2, 330]);
            let out = interpolate_lines(&[s], s.abs_slope(), &g, 0.25);
            assert_eq!(out.accepted(), 1);
            assert_eq!(out.lines[0].p1, [0, 539]);
            assert_eq!(out.lines[0].p2, [x2, 330], "segment ending at x={x2}");
        }
    }

    #[test]
    fn endpoints_on_the_frame_edge_are_kept() {
        // x at y=400 is 0, x at y=200 is 800
        let s = signal(0, [0, 400, 400, 300]);
        let g = LaneGeometry::new(400, 200, 800);
        let out = interpolate_lines(&[s], 0.25, &g, 0.1);
        assert_eq!(out.accepted(), 1);
        assert_eq!(out.lines[0].p1, [0, 400]);
        assert_eq!(out.lines[0].p2, [800, 200]);
    }
}
