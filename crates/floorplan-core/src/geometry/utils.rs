//! Pure point math used by shape geometry and hit-testing.

use super::Point;

/// Rotates `p` around `center` by `angle_deg` degrees
pub fn rotate_point(p: Point, center: Point, angle_deg: f64) -> Point {
    let angle_rad = angle_deg.to_radians();
    let s = angle_rad.sin();
    let c = angle_rad.cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point {
        x: center.x + dx * c - dy * s,
        y: center.y + dx * s + dy * c,
    }
}

/// Arithmetic mean of the points, `None` for an empty slice
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Point::default(), |acc, p| acc + *p);
    Some(sum / points.len() as f64)
}

/// Inclusive test against the circle `(x - cx)^2 + (y - cy)^2 <= r^2`
pub fn point_in_circle(point: Point, center: Point, radius: f64) -> bool {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    dx * dx + dy * dy <= radius * radius
}

/// Inclusive test against the axis-aligned rectangle at `top_left`
pub fn point_in_rect(point: Point, top_left: Point, width: f64, height: f64) -> bool {
    point.x >= top_left.x
        && point.x <= top_left.x + width
        && point.y >= top_left.y
        && point.y <= top_left.y + height
}

/// Distance from `point` to the segment `start..end`, with the projection
/// clamped to the segment.
///
/// Returns `None` for a zero-length segment.
pub fn distance_to_segment(point: Point, start: Point, end: Point) -> Option<f64> {
    let d = end - start;
    let length_sq = d.dot(&d);
    if length_sq == 0.0 {
        return None;
    }
    let t = ((point - start).dot(&d) / length_sq).clamp(0.0, 1.0);
    let projection = start + d * t;
    Some(point.distance_to(&projection))
}

/// True when `point` is within `threshold` of the segment. A zero-length
/// segment never matches.
pub fn point_near_segment(point: Point, start: Point, end: Point, threshold: f64) -> bool {
    distance_to_segment(point, start, end).is_some_and(|d| d <= threshold)
}

/// Point at parameter `t` on the quadratic Bezier `start, control, end`
pub fn quadratic_point(start: Point, control: Point, end: Point, t: f64) -> Point {
    let u = 1.0 - t;
    start * (u * u) + control * (2.0 * u * t) + end * (t * t)
}
