/// Region-of-interest lookup used to validate segment endpoints.
///
/// Coordinates outside the underlying frame are never inside the region.
pub trait RegionMask {
    fn contains(&self, x: i32, y: i32) -> bool;

    /// True when at least one of the points lies inside the region.
    fn contains_any(&self, points: &[[i32; 2]]) -> bool {
        points.iter().any(|p| self.contains(p[0], p[1]))
    }
}

impl<M: RegionMask + ?Sized> RegionMask for &M {
    #[inline]
    fn contains(&self, x: i32, y: i32) -> bool {
        (**self).contains(x, y)
    }
}

/// Region covering the whole frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmaskedRegion {
    pub width: usize,
    pub height: usize,
}

impl UnmaskedRegion {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl RegionMask for UnmaskedRegion {
    #[inline]
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
}
