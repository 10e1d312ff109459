//! Identifier and limit types shared across the editor crates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a shape.
///
/// Assigned once when the shape is created and never changed afterwards. It is
/// the only key used by the shape collection and by command bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(String);

impl ShapeId {
    /// Generate a fresh random (v4 UUID) id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ShapeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ShapeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Numeric limits for handle hit-testing, resizing and connector hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeLimits {
    /// Handle hit radius used when a shape has no handle properties
    pub handle_size: f64,
    /// Smallest width/height a rectangular handle drag may produce
    pub min_resize: f64,
    /// Minimum width of a text box at construction
    pub text_min_width: f64,
    /// Minimum height of a text box at construction
    pub text_min_height: f64,
    /// Distance within which a point counts as "on" a connector
    pub connector_hit_threshold: f64,
    /// Number of line segments approximating a curved connector
    pub curve_segments: usize,
    /// Perpendicular offset of the curve control point, as a fraction of length
    pub curve_offset_ratio: f64,
}

impl Default for ShapeLimits {
    fn default() -> Self {
        Self {
            handle_size: 5.0,
            min_resize: 20.0,
            text_min_width: 150.0,
            text_min_height: 50.0,
            connector_hit_threshold: 5.0,
            curve_segments: 10,
            curve_offset_ratio: 0.2,
        }
    }
}
