//! Hit-testing strategies.
//!
//! A selection strategy decides whether a point (already in canvas
//! coordinates) counts as "on" a shape. Each shape kind composes one.

use floorplan_core::geometry::{point_in_circle, point_in_rect, point_near_segment, quadratic_point};
use floorplan_core::Point;

use crate::shapes::{Connector, DesignerShape, Wall};

/// Point containment test for one kind of shape.
pub trait SelectionStrategy<S: ?Sized> {
    fn is_selected(&self, point: Point, shape: &S) -> bool;
}

/// A wall is hit on either endpoint handle or inside the band swept by its
/// thickness along the segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallSelection;

impl SelectionStrategy<Wall> for WallSelection {
    fn is_selected(&self, point: Point, wall: &Wall) -> bool {
        let start = wall.start();
        let end = wall.end();
        let radius = wall.handle_size();

        if [start, end]
            .iter()
            .any(|h| point_in_circle(point, *h, radius))
        {
            return true;
        }

        let d = end - start;
        let length = d.length();
        if length == 0.0 {
            return false;
        }

        // Distance to the infinite line through the wall, then the projection
        // must land between the endpoints
        let perp_distance =
            ((d.y * point.x - d.x * point.y + end.x * start.y - end.y * start.x) / length).abs();
        let dot = (point - start).dot(&d);
        let within_length = dot >= 0.0 && dot <= length * length;

        perp_distance <= wall.thickness() / 2.0 && within_length
    }
}

/// Text and image boxes are hit on any handle or anywhere inside the box,
/// edges included.
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangularSelection;

impl<S: DesignerShape> SelectionStrategy<S> for RectangularSelection {
    fn is_selected(&self, point: Point, shape: &S) -> bool {
        let radius = shape.handle_size();
        if shape
            .handles()
            .iter()
            .any(|h| point_in_circle(point, *h, radius))
        {
            return true;
        }
        shape
            .bounds()
            .is_some_and(|b| point_in_rect(point, b.start, b.width(), b.height()))
    }
}

/// A connector is hit within `threshold` of its path. Curves are approximated
/// by `segments` straight pieces.
#[derive(Debug, Clone, Copy)]
pub struct ConnectorSelection {
    pub threshold: f64,
    pub segments: usize,
}

impl Default for ConnectorSelection {
    fn default() -> Self {
        Self {
            threshold: 5.0,
            segments: 10,
        }
    }
}

impl ConnectorSelection {
    fn near_curve(&self, point: Point, start: Point, control: Point, end: Point) -> bool {
        let n = self.segments.max(1);
        (0..n).any(|i| {
            let t1 = i as f64 / n as f64;
            let t2 = (i + 1) as f64 / n as f64;
            let p1 = quadratic_point(start, control, end, t1);
            let p2 = quadratic_point(start, control, end, t2);
            point_near_segment(point, p1, p2, self.threshold)
        })
    }
}

impl SelectionStrategy<Connector> for ConnectorSelection {
    fn is_selected(&self, point: Point, connector: &Connector) -> bool {
        let source = connector.source().position;
        let target = connector.target().position;
        match connector.control_point() {
            Some(control) => self.near_curve(point, source, control, target),
            None => point_near_segment(point, source, target, self.threshold),
        }
    }
}
