use serde::{Deserialize, Serialize};

/// Raw segment as reported by a probabilistic Hough transform, in integer
/// pixel coordinates `(x1, y1, x2, y2)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl LineSegment {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    pub fn p1(&self) -> [i32; 2] {
        [self.x1, self.y1]
    }

    #[inline]
    pub fn p2(&self) -> [i32; 2] {
        [self.x2, self.y2]
    }

    /// True when the segment has no extent along one of the axes.
    #[inline]
    pub fn is_axis_degenerate(&self) -> bool {
        self.x1 == self.x2 || self.y1 == self.y2
    }
}

impl From<[i32; 4]> for LineSegment {
    fn from(v: [i32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<(i32, i32, i32, i32)> for LineSegment {
    fn from(v: (i32, i32, i32, i32)) -> Self {
        Self::new(v.0, v.1, v.2, v.3)
    }
}

/// Lane side, following image coordinates where y grows downward: a positive
/// slope is the left boundary, a negative slope the right one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaneSide {
    Left,
    Right,
}

impl LaneSide {
    #[inline]
    pub fn from_slope(slope: f64) -> Self {
        if slope < 0.0 {
            LaneSide::Right
        } else {
            LaneSide::Left
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LaneSide::Left => "left",
            LaneSide::Right => "right",
        }
    }
}

/// Vertical band the lanes are extrapolated across, plus the right-most valid
/// column of the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct LaneGeometry {
    /// Row closest to the vehicle (usually the bottom of the frame).
    pub lower_bound: i32,
    /// Row where the extrapolated lanes stop (towards the horizon).
    pub upper_bound: i32,
    /// Largest valid x coordinate, i.e. `width - 1`.
    pub horizontal_limit: i32,
}

/// Vertical distance between the frame centre and the apex of the default ROI.
pub const ROI_APEX_OFFSET: i32 = 10;

impl LaneGeometry {
    pub fn new(lower_bound: i32, upper_bound: i32, horizontal_limit: i32) -> Self {
        Self {
            lower_bound,
            upper_bound,
            horizontal_limit,
        }
    }

    /// Geometry matching the default trapezoid ROI of a `width x height` frame.
    pub fn for_frame(width: usize, height: usize) -> Self {
        let w = width as i32;
        let h = height as i32;
        Self {
            lower_bound: (h - 1).max(0),
            upper_bound: h / 2 + ROI_APEX_OFFSET,
            horizontal_limit: (w - 1).max(0),
        }
    }

    #[inline]
    pub fn contains_x(&self, x: i32) -> bool {
        (0..=self.horizontal_limit).contains(&x)
    }
}

/// Filled quadrilateral covering one lane boundary.
///
/// Vertices are ordered lower-left, upper-left, upper-right, lower-right with
/// respect to the averaged boundary line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanePolygon {
    pub side: LaneSide,
    pub vertices: [[i32; 2]; 4],
}

/// Per-frame lane output. `None` marks a side without any contributing line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanePolygons {
    pub left: Option<LanePolygon>,
    pub right: Option<LanePolygon>,
}

impl LanePolygons {
    pub fn side(&self, side: LaneSide) -> Option<&LanePolygon> {
        match side {
            LaneSide::Left => self.left.as_ref(),
            LaneSide::Right => self.right.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn found(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }
}
