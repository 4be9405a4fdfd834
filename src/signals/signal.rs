use crate::types::{LaneSide, LineSegment};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Identifier of a signal: the index of its segment in the frame's input list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalId(pub u32);

/// Hough segment accepted as a lane candidate, with its derived line terms.
///
/// The line through the segment is `x = y / slope - offset`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub id: SignalId,
    pub p1: [i32; 2],
    pub p2: [i32; 2],
    /// `dy / dx`, never zero.
    pub slope: f64,
    /// `y1 / slope - x1`.
    pub offset: f64,
    /// Euclidean segment length.
    pub magnitude: f64,
}

impl Signal {
    /// Derive the line terms of a segment. Returns `None` for segments without
    /// extent on an axis, or whose slope evaluates to zero.
    pub fn from_segment(id: SignalId, seg: &LineSegment) -> Option<Self> {
        if seg.is_axis_degenerate() {
            return None;
        }
        let d = Vector2::new((seg.x2 - seg.x1) as f64, (seg.y2 - seg.y1) as f64);
        let slope = d.y / d.x;
        if slope == 0.0 || !slope.is_finite() {
            return None;
        }
        Some(Self {
            id,
            p1: seg.p1(),
            p2: seg.p2(),
            slope,
            offset: seg.y1 as f64 / slope - seg.x1 as f64,
            magnitude: d.norm(),
        })
    }

    #[inline]
    pub fn abs_slope(&self) -> f64 {
        self.slope.abs()
    }

    #[inline]
    pub fn side(&self) -> LaneSide {
        LaneSide::from_slope(self.slope)
    }

    /// Column where the signal's line crosses row `y`.
    #[inline]
    pub fn x_at(&self, y: f64) -> f64 {
        y / self.slope - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_slope_offset_and_magnitude() {
        let s = Signal::from_segment(SignalId(3), &LineSegment::new(0, 400, 100, 300)).unwrap();
        assert_eq!(s.id, SignalId(3));
        assert_eq!(s.slope, -1.0);
        assert_eq!(s.offset, -400.0);
        assert!((s.magnitude - 141.421_36).abs() < 1e-3);
        assert_eq!(s.side(), LaneSide::Right);
        assert_eq!(s.x_at(400.0), 0.0);
        assert_eq!(s.x_at(200.0), 200.0);
    }

    #[test]
    fn line_passes_through_both_endpoints() {
        let s = Signal::from_segment(SignalId(0), &LineSegment::new(10, 50, 40, 110)).unwrap();
        assert!((s.x_at(50.0) - 10.0).abs() < 1e-4);
        assert!((s.x_at(110.0) - 40.0).abs() < 1e-4);
    }

    #[test]
    fn axis_aligned_segments_have_no_signal() {
        assert!(Signal::from_segment(SignalId(0), &LineSegment::new(0, 0, 10, 0)).is_none());
        assert!(Signal::from_segment(SignalId(0), &LineSegment::new(5, 0, 5, 10)).is_none());
    }
}
