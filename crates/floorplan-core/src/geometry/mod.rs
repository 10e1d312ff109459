//! Geometry value types: points and axis-aligned bounds.

mod utils;

pub use utils::{
    centroid, distance_to_segment, point_in_circle, point_in_rect, point_near_segment,
    quadratic_point, rotate_point,
};

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A point in virtual canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Length of the vector from the origin to this point
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        (*self + *other) / 2.0
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Unit vector pointing from `self` towards `other`.
    ///
    /// Returns the zero vector when both points coincide.
    pub fn direction_to(&self, other: &Point) -> Point {
        let delta = *other - *self;
        let magnitude = delta.length();
        if magnitude == 0.0 {
            return Point::default();
        }
        delta / magnitude
    }

    /// Moves `distance` units along the (unit) vector `direction`
    pub fn translate_in_direction(&self, direction: &Point, distance: f64) -> Point {
        *self + *direction * distance
    }

    /// The vector rotated a quarter turn: `(x, y) -> (-y, x)`
    pub fn perpendicular(&self) -> Point {
        Point::new(-self.y, self.x)
    }

    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

/// Axis-aligned box given by two corners.
///
/// `start` and `end` are kept as supplied. Shape bounds are always normalized
/// (`start` is the min corner), but a selection box keeps the drag direction so
/// callers can tell a left-to-right drag from a right-to-left one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub start: Point,
    pub end: Point,
}

impl Bounds {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Builds normalized bounds (min corner first) from any two corners
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            start: Point::new(a.x.min(b.x), a.y.min(b.y)),
            end: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Smallest bounds containing every point, `None` for an empty slice
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self { start: min, end: max })
    }

    pub fn min_x(&self) -> f64 {
        self.start.x.min(self.end.x)
    }

    pub fn max_x(&self) -> f64 {
        self.start.x.max(self.end.x)
    }

    pub fn min_y(&self) -> f64 {
        self.start.y.min(self.end.y)
    }

    pub fn max_y(&self) -> f64 {
        self.start.y.max(self.end.y)
    }

    pub fn width(&self) -> f64 {
        self.max_x() - self.min_x()
    }

    pub fn height(&self) -> f64 {
        self.max_y() - self.min_y()
    }

    pub fn center(&self) -> Point {
        self.start.midpoint(&self.end)
    }

    /// True when the box was dragged from left to right
    pub fn is_left_to_right(&self) -> bool {
        self.start.x < self.end.x
    }

    /// Inclusive point containment
    pub fn contains_point(&self, p: &Point) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }

    /// True when `other` lies entirely inside `self` (edges inclusive)
    pub fn contains(&self, other: &Bounds) -> bool {
        other.min_x() >= self.min_x()
            && other.max_x() <= self.max_x()
            && other.min_y() >= self.min_y()
            && other.max_y() <= self.max_y()
    }

    /// True when the boxes overlap or touch
    pub fn intersects(&self, other: &Bounds) -> bool {
        !(other.max_x() < self.min_x()
            || other.min_x() > self.max_x()
            || other.max_y() < self.min_y()
            || other.min_y() > self.max_y())
    }
}
