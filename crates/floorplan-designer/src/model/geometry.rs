use floorplan_core::geometry::centroid;
use floorplan_core::{Bounds, Point};
use serde::{Deserialize, Serialize};

/// Straight segment, the governing geometry of a wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    pub start: Point,
    pub end: Point,
}

impl LineGeometry {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn midpoint(&self) -> Point {
        self.start.midpoint(&self.end)
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            start: self.start.translate(dx, dy),
            end: self.end.translate(dx, dy),
        }
    }
}

/// Axis-aligned box given by its top-left and bottom-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangularGeometry {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl RectangularGeometry {
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    pub fn width(&self) -> f64 {
        (self.bottom_right.x - self.top_left.x).abs()
    }

    pub fn height(&self) -> f64 {
        (self.bottom_right.y - self.top_left.y).abs()
    }

    pub fn center(&self) -> Point {
        self.top_left.midpoint(&self.bottom_right)
    }

    /// Swaps corner components so that `top_left` is the min corner
    pub fn normalized(&self) -> Self {
        let b = Bounds::from_corners(self.top_left, self.bottom_right);
        Self {
            top_left: b.start,
            bottom_right: b.end,
        }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            top_left: self.top_left.translate(dx, dy),
            bottom_right: self.bottom_right.translate(dx, dy),
        }
    }

    /// Normalized bounds, whatever the corner order
    pub fn bounds(&self) -> Bounds {
        Bounds::from_corners(self.top_left, self.bottom_right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcGeometry {
    pub start: Point,
    pub end: Point,
    pub center: Point,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleGeometry {
    pub center: Point,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolygonGeometry {
    pub vertices: Vec<Point>,
}

/// Geometry of any shape kind.
///
/// Serialized without a tag; variants are told apart by their fields, so arcs
/// are tried before lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Geometry {
    Arc(ArcGeometry),
    Line(LineGeometry),
    Circle(CircleGeometry),
    Rectangular(RectangularGeometry),
    Polygon(PolygonGeometry),
}

impl Geometry {
    /// The semantic center used as a shape's `position`
    pub fn centroid(&self) -> Option<Point> {
        match self {
            Geometry::Arc(a) => Some(a.center),
            Geometry::Line(l) => Some(l.midpoint()),
            Geometry::Circle(c) => Some(c.center),
            Geometry::Rectangular(r) => Some(r.center()),
            Geometry::Polygon(p) => centroid(&p.vertices),
        }
    }

    /// Normalized axis-aligned bounds; `None` for an empty polygon
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Geometry::Arc(a) => Some(circle_bounds(a.center, a.radius)),
            Geometry::Line(l) => Some(Bounds::from_corners(l.start, l.end)),
            Geometry::Circle(c) => Some(circle_bounds(c.center, c.radius)),
            Geometry::Rectangular(r) => Some(Bounds::from_corners(r.top_left, r.bottom_right)),
            Geometry::Polygon(p) => Bounds::enclosing(&p.vertices),
        }
    }
}

fn circle_bounds(center: Point, radius: f64) -> Bounds {
    let r = radius.abs();
    Bounds::new(center.translate(-r, -r), center.translate(r, r))
}

impl From<LineGeometry> for Geometry {
    fn from(value: LineGeometry) -> Self {
        Geometry::Line(value)
    }
}

impl From<RectangularGeometry> for Geometry {
    fn from(value: RectangularGeometry) -> Self {
        Geometry::Rectangular(value)
    }
}
