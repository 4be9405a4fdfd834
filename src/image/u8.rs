use super::traits::RegionMask;

/// Borrowed 8-bit single-channel view. As a [`RegionMask`], non-zero pixels
/// are inside the region.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Bounds-checked lookup with signed coordinates.
    #[inline]
    pub fn try_get(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.w || y >= self.h {
            return None;
        }
        self.data.get(y * self.stride + x).copied()
    }
}

impl<'a> RegionMask for ImageU8<'a> {
    #[inline]
    fn contains(&self, x: i32, y: i32) -> bool {
        self.try_get(x, y).is_some_and(|v| v != 0)
    }
}
