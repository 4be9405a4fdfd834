//! Lane polygons from interpolated lines.
//!
//! Lines are grouped by side, their endpoint columns averaged on the lower and
//! upper rows, and each side becomes a trapezoid widened by a fixed number of
//! pixels on each edge.
use crate::error::LaneError;
use crate::interpolate::InterpolatedLine;
use crate::types::{LaneGeometry, LanePolygon, LanePolygons, LaneSide};
use log::{debug, error};

/// Mean endpoint columns of one side's lines, truncated toward zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointStats {
    pub mean_x_lower: i32,
    pub mean_x_upper: i32,
}

/// Average the endpoint columns on the lower row and on the upper row.
///
/// An endpoint whose row equals `lower_bound` counts towards the lower mean;
/// the other endpoint of the same line counts towards the upper mean.
pub fn point_stats<'a, I>(lines: I, lower_bound: i32) -> Result<PointStats, LaneError>
where
    I: IntoIterator<Item = &'a InterpolatedLine>,
{
    let (mut lower_sum, mut upper_sum, mut n) = (0i64, 0i64, 0i64);
    for line in lines {
        let (lower, upper) = if line.p1[1] == lower_bound {
            (line.p1, line.p2)
        } else {
            (line.p2, line.p1)
        };
        lower_sum += i64::from(lower[0]);
        upper_sum += i64::from(upper[0]);
        n += 1;
    }
    if n == 0 {
        return Err(LaneError::EmptyAggregation {
            what: "interpolated lines",
        });
    }
    Ok(PointStats {
        mean_x_lower: (lower_sum / n) as i32,
        mean_x_upper: (upper_sum / n) as i32,
    })
}

/// Trapezoid around the averaged line, vertices in the order
/// lower-left, upper-left, upper-right, lower-right.
pub fn lane_polygon(
    side: LaneSide,
    stats: PointStats,
    geometry: &LaneGeometry,
    lower_x_offset: i32,
    upper_x_offset: i32,
) -> LanePolygon {
    let PointStats {
        mean_x_lower: lower,
        mean_x_upper: upper,
    } = stats;
    LanePolygon {
        side,
        vertices: [
            [lower - lower_x_offset, geometry.lower_bound],
            [upper - upper_x_offset, geometry.upper_bound],
            [upper + upper_x_offset, geometry.upper_bound],
            [lower + lower_x_offset, geometry.lower_bound],
        ],
    }
}

fn side_polygon(
    lines: &[InterpolatedLine],
    side: LaneSide,
    geometry: &LaneGeometry,
    lower_x_offset: i32,
    upper_x_offset: i32,
) -> Option<LanePolygon> {
    let mut side_lines = lines.iter().filter(|l| l.side() == side).peekable();
    if side_lines.peek().is_none() {
        debug!("no {} lane lines", side.label());
        return None;
    }
    match point_stats(side_lines, geometry.lower_bound) {
        Ok(stats) => Some(lane_polygon(
            side,
            stats,
            geometry,
            lower_x_offset,
            upper_x_offset,
        )),
        Err(err) => {
            error!("{} lane: {err}", side.label());
            None
        }
    }
}

/// Build the left and right lane polygons. A side without lines is `None`.
pub fn build_polygons(
    lines: &[InterpolatedLine],
    geometry: &LaneGeometry,
    lower_x_offset: i32,
    upper_x_offset: i32,
) -> LanePolygons {
    let polygons = LanePolygons {
        left: side_polygon(lines, LaneSide::Left, geometry, lower_x_offset, upper_x_offset),
        right: side_polygon(lines, LaneSide::Right, geometry, lower_x_offset, upper_x_offset),
    };
    debug!(
        "polygons (left, right): ({:?}, {:?})",
        polygons.left.map(|p| p.vertices),
        polygons.right.map(|p| p.vertices)
    );
    polygons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::SignalId;

    fn line(id: u32, slope: f64, p1: [i32; 2], p2: [i32; 2]) -> InterpolatedLine {
        InterpolatedLine {
            id: SignalId(id),
            slope,
            offset: 0.0,
            p1,
            p2,
        }
    }

    fn geometry() -> LaneGeometry {
        LaneGeometry::new(400, 200, 800)
    }

    #[test]
    fn vertices_follow_fixed_order() {
        let lines = [line(0, -1.0, [0, 400], [200, 200])];
        let polys = build_polygons(&lines, &geometry(), 5, 10);
        assert!(polys.left.is_none());
        let right = polys.right.unwrap();
        assert_eq!(right.side, LaneSide::Right);
        assert_eq!(
            right.vertices,
            [[-5, 400], [190, 200], [210, 200], [5, 400]]
        );
    }

    #[test]
    fn endpoints_are_matched_by_row_not_position() {
        let lines = [
            line(0, 1.0, [600, 400], [400, 200]),
            // endpoints stored upper-first
            line(1, 1.0, [410, 200], [615, 400]),
        ];
        let stats = point_stats(&lines, 400).unwrap();
        assert_eq!(stats.mean_x_lower, 607);
        assert_eq!(stats.mean_x_upper, 405);
    }

    #[test]
    fn sides_are_split_by_slope_sign() {
        let lines = [
            line(0, 1.0, [600, 400], [400, 200]),
            line(1, -1.0, [100, 400], [300, 200]),
            line(2, -0.9, [120, 400], [320, 200]),
        ];
        let polys = build_polygons(&lines, &geometry(), 5, 10);
        assert_eq!(polys.found(), 2);
        let left = polys.left.unwrap();
        let right = polys.right.unwrap();
        assert_eq!(left.side, LaneSide::Left);
        assert_eq!(left.vertices[0], [595, 400]);
        assert_eq!(right.vertices[0], [105, 400]);
        assert_eq!(right.vertices[1], [300, 200]);
    }

    #[test]
    fn no_lines_means_no_polygons() {
        let polys = build_polygons(&[], &geometry(), 5, 10);
        assert!(polys.is_empty());
        let none: [InterpolatedLine; 0] = [];
        let err = point_stats(&none, 400).unwrap_err();
        assert!(matches!(err, LaneError::EmptyAggregation { .. }));
    }
}
