//! Region-of-interest masks over the road surface.
//!
//! The default ROI is a trapezoid spanning the full bottom row of the frame
//! and narrowing to a short edge just below the frame centre.
use super::io::GrayImageU8;
use crate::types::ROI_APEX_OFFSET;

/// Half-width of the trapezoid apex, in pixels.
const ROI_APEX_HALF_WIDTH: i32 = 10;

/// Vertices of the default trapezoid for a `width x height` frame.
pub fn default_roi_vertices(width: usize, height: usize) -> [[i32; 2]; 4] {
    let w = width as i32;
    let h = height as i32;
    let apex_y = h / 2 + ROI_APEX_OFFSET;
    [
        [0, h - 1],
        [w / 2 - ROI_APEX_HALF_WIDTH, apex_y],
        [w / 2 + ROI_APEX_HALF_WIDTH, apex_y],
        [w - 1, h - 1],
    ]
}

/// Rasterise the default trapezoid ROI into an 8-bit mask (255 inside).
pub fn default_roi_mask(width: usize, height: usize) -> GrayImageU8 {
    polygon_mask(width, height, &default_roi_vertices(width, height))
}

/// Rasterise a convex polygon into an 8-bit mask. Pixels on the boundary are
/// inside.
pub fn polygon_mask(width: usize, height: usize, vertices: &[[i32; 2]]) -> GrayImageU8 {
    let mut mask = GrayImageU8::zeros(width, height);
    if width == 0 || height == 0 || vertices.len() < 3 {
        return mask;
    }
    let y_min = vertices.iter().map(|v| v[1]).min().unwrap_or(0).max(0) as usize;
    let y_max = vertices.iter().map(|v| v[1]).max().unwrap_or(0).max(0) as usize;
    for y in y_min..=y_max.min(height.saturating_sub(1)) {
        for x in 0..width {
            if inside_convex(vertices, x as i64, y as i64) {
                mask.set(x, y, 255);
            }
        }
    }
    mask
}

fn inside_convex(vertices: &[[i32; 2]], x: i64, y: i64) -> bool {
    let mut pos = false;
    let mut neg = false;
    for (i, a) in vertices.iter().enumerate() {
        let b = vertices[(i + 1) % vertices.len()];
        let (ax, ay) = (a[0] as i64, a[1] as i64);
        let (bx, by) = (b[0] as i64, b[1] as i64);
        let cross = (bx - ax) * (y - ay) - (by - ay) * (x - ax);
        pos |= cross > 0;
        neg |= cross < 0;
        if pos && neg {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::RegionMask;

    #[test]
    fn default_mask_covers_road_not_sky() {
        let mask = default_roi_mask(200, 100);
        // bottom row fully inside
        assert!(mask.contains(0, 99));
        assert!(mask.contains(199, 99));
        // apex row is narrow
        assert!(mask.contains(100, 60));
        assert!(!mask.contains(20, 60));
        // above the apex nothing is inside
        assert!(!mask.contains(100, 30));
    }

    #[test]
    fn zero_sized_frames_give_empty_masks() {
        for (w, h) in [(640, 0), (0, 480), (0, 0)] {
            let mask = default_roi_mask(w, h);
            assert_eq!((mask.width(), mask.height()), (w, h));
            assert!(!mask.contains(0, 0));
        }
    }

    #[test]
    fn degenerate_polygon_is_empty() {
        let mask = polygon_mask(10, 10, &[[0, 0], [5, 5]]);
        assert!(!mask.contains(0, 0));
    }
}
