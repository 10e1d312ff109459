use floorplan_core::{Bounds, Point, ShapeId};

use crate::model::{ConnectionKind, ConnectionPoint, ShapeRecord, ShapeStyle};

/// State shared by every shape kind: the live property bag, the frozen
/// baseline of the current gesture, and the runtime flags that are not
/// persisted.
///
/// `old_properties` is replaced wholesale by [`BaseShape::capture_state`] and is
/// never mutated in between, so gesture math computed against it does not
/// drift across frames.
#[derive(Debug, Clone)]
pub struct BaseShape<D: ShapeRecord> {
    properties: D,
    old_properties: D,
    z_index: i64,
    selected: bool,
    hovered: bool,
    connection_points: Vec<ConnectionPoint>,
}

impl<D: ShapeRecord> BaseShape<D> {
    pub fn new(properties: D) -> Self {
        Self {
            old_properties: properties.clone(),
            properties,
            z_index: 0,
            selected: false,
            hovered: false,
            connection_points: Vec::new(),
        }
    }

    pub fn properties(&self) -> &D {
        &self.properties
    }

    pub(crate) fn properties_mut(&mut self) -> &mut D {
        &mut self.properties
    }

    /// The baseline captured at the start of the current gesture
    pub fn old_properties(&self) -> &D {
        &self.old_properties
    }

    pub fn capture_state(&mut self) {
        self.old_properties = self.properties.clone();
    }

    pub fn restore_state(&mut self, data: D) {
        self.properties = data;
    }

    pub fn id(&self) -> Option<&ShapeId> {
        self.properties.common().id.as_ref()
    }

    pub fn position(&self) -> Point {
        self.properties.common().position
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.properties.common_mut().position = position;
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.properties.common().style
    }

    pub fn set_style(&mut self, style: ShapeStyle) {
        self.properties.common_mut().style = style;
    }

    pub fn z_index(&self) -> i64 {
        self.z_index
    }

    pub fn set_z_index(&mut self, z_index: i64) {
        self.z_index = z_index;
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn connection_points(&self) -> &[ConnectionPoint] {
        &self.connection_points
    }

    /// Rebuilds the four edge-midpoint anchors (top, right, bottom, left).
    ///
    /// Shapes without bounds keep no anchors.
    pub(crate) fn refresh_connection_points(&mut self, bounds: Option<Bounds>) {
        let Some(Bounds { start, end }) = bounds else {
            self.connection_points.clear();
            return;
        };
        let center = self.position();
        let owner = self.id().cloned();
        let prefix = owner.as_ref().map(ShapeId::as_str).unwrap_or_default().to_string();

        let anchor = |side: &str, position: Point| ConnectionPoint {
            id: format!("{prefix}-{side}"),
            position,
            kind: ConnectionKind::Bidirectional,
            parent_id: owner.clone(),
        };

        self.connection_points = vec![
            anchor("top", Point::new(center.x, start.y)),
            anchor("right", Point::new(end.x, center.y)),
            anchor("bottom", Point::new(center.x, end.y)),
            anchor("left", Point::new(start.x, center.y)),
        ];
    }
}
