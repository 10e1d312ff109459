//! Handle layout and resize policy shared by the rectangular shapes.

use floorplan_core::{Point, ShapeError};

use crate::model::RectangularGeometry;

/// Number of handles on a rectangular shape.
pub const RECTANGULAR_HANDLE_COUNT: usize = 8;

/// The eight handles in the order top-left, top-center, top-right,
/// middle-right, bottom-right, bottom-center, bottom-left, middle-left.
///
/// Edge midpoints take their free coordinate from the box center.
pub fn rectangular_handles(geometry: &RectangularGeometry) -> Vec<Point> {
    let start = geometry.top_left;
    let end = geometry.bottom_right;
    let position = geometry.center();
    vec![
        start,
        Point::new(position.x, start.y),
        Point::new(end.x, start.y),
        Point::new(end.x, position.y),
        end,
        Point::new(position.x, end.y),
        Point::new(start.x, end.y),
        Point::new(start.x, position.y),
    ]
}

/// Applies a handle drag to `baseline` and returns the new geometry.
///
/// Each axis is guarded independently: an adjustment that would leave the
/// width or height at or below `min_size` is skipped for that axis only, and
/// the baseline value is kept.
pub fn resize_rectangle(
    baseline: &RectangularGeometry,
    index: usize,
    pointer: Point,
    min_size: f64,
) -> Result<RectangularGeometry, ShapeError> {
    let mut geo = *baseline;
    let (move_left, move_top, move_right, move_bottom) = match index {
        0 => (true, true, false, false),
        1 => (false, true, false, false),
        2 => (false, true, true, false),
        3 => (false, false, true, false),
        4 => (false, false, true, true),
        5 => (false, false, false, true),
        6 => (true, false, false, true),
        7 => (true, false, false, false),
        _ => {
            return Err(ShapeError::InvalidHandleIndex {
                index,
                count: RECTANGULAR_HANDLE_COUNT,
            })
        }
    };

    if move_left && pointer.x < baseline.bottom_right.x - min_size {
        geo.top_left.x = pointer.x;
    }
    if move_right && pointer.x > baseline.top_left.x + min_size {
        geo.bottom_right.x = pointer.x;
    }
    if move_top && pointer.y < baseline.bottom_right.y - min_size {
        geo.top_left.y = pointer.y;
    }
    if move_bottom && pointer.y > baseline.top_left.y + min_size {
        geo.bottom_right.y = pointer.y;
    }

    Ok(geo)
}
