use floorplan_core::{Bounds, Point, ShapeError, ShapeLimits};

use super::{BaseShape, ShapeKind};
use crate::model::{ConnectionPoint, ConnectorData, ConnectorRoute};
use crate::render::{ConnectorRenderer, RenderStrategy, RenderSurface};
use crate::selection::{ConnectorSelection, SelectionStrategy};

/// A straight or curved link between two connection points.
///
/// Handle 0 is the source point, handle 1 the target point. Curved
/// connectors carry one derived quadratic control point.
#[derive(Debug, Clone)]
pub struct Connector {
    base: BaseShape<ConnectorData>,
    limits: ShapeLimits,
    selection: ConnectorSelection,
    renderer: ConnectorRenderer,
}

/// Control point of a curved connector: the midpoint pushed off the segment,
/// perpendicular to it, by `offset_ratio` of its length.
///
/// Returns `None` for a zero-length segment, which renders straight.
pub fn curve_control_point(source: Point, target: Point, offset_ratio: f64) -> Option<Point> {
    let d = target - source;
    let distance = d.length();
    if distance == 0.0 {
        return None;
    }
    let mid = source.midpoint(&target);
    let offset = distance * offset_ratio;
    Some(Point::new(
        mid.x - (d.y / distance) * offset,
        mid.y + (d.x / distance) * offset,
    ))
}

impl Connector {
    pub fn new(mut data: ConnectorData, limits: ShapeLimits) -> Result<Self, ShapeError> {
        derive_path(&mut data, limits.curve_offset_ratio);

        let selection = ConnectorSelection {
            threshold: limits.connector_hit_threshold,
            segments: limits.curve_segments,
        };
        let mut shape = Self {
            base: BaseShape::new(data),
            limits,
            selection,
            renderer: ConnectorRenderer,
        };
        shape.refresh_connection_points();
        Ok(shape)
    }

    pub fn connector_data(&self) -> &ConnectorData {
        self.base.properties()
    }

    pub fn source(&self) -> &ConnectionPoint {
        &self.base.properties().source_point
    }

    pub fn target(&self) -> &ConnectionPoint {
        &self.base.properties().target_point
    }

    pub fn route(&self) -> ConnectorRoute {
        self.base.properties().route
    }

    /// The quadratic control point, present only for a curved connector
    /// of non-zero length
    pub fn control_point(&self) -> Option<Point> {
        self.base.properties().control_points.first().copied()
    }

    /// Re-derives the path after a connected shape moved one of the endpoints
    pub fn update_connections(&mut self) {
        let ratio = self.limits.curve_offset_ratio;
        derive_path(self.base.properties_mut(), ratio);
    }
}

fn derive_path(data: &mut ConnectorData, offset_ratio: f64) {
    let source = data.source_point.position;
    let target = data.target_point.position;
    data.control_points = match data.route {
        ConnectorRoute::Straight => Vec::new(),
        ConnectorRoute::Curved => curve_control_point(source, target, offset_ratio)
            .into_iter()
            .collect(),
    };
    data.common.position = source.midpoint(&target);
}

impl ShapeKind for Connector {
    type Data = ConnectorData;

    fn base(&self) -> &BaseShape<ConnectorData> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseShape<ConnectorData> {
        &mut self.base
    }

    fn limits(&self) -> &ShapeLimits {
        &self.limits
    }

    fn bounds_of(data: &ConnectorData) -> Option<Bounds> {
        let mut points = vec![data.source_point.position, data.target_point.position];
        points.extend(data.control_points.iter().copied());
        Bounds::enclosing(&points)
    }

    fn handles_of(data: &ConnectorData) -> Vec<Point> {
        vec![data.source_point.position, data.target_point.position]
    }

    fn derive(&self, data: &mut ConnectorData) {
        derive_path(data, self.limits.curve_offset_ratio);
    }

    fn apply_handle(&mut self, index: usize, pointer: Point) -> Result<(), ShapeError> {
        let props = self.base.properties_mut();
        match index {
            0 => props.source_point.position = pointer,
            1 => props.target_point.position = pointer,
            _ => return Err(ShapeError::InvalidHandleIndex { index, count: 2 }),
        }
        self.update_connections();
        Ok(())
    }

    fn apply_move(&mut self, drag_start: Point, current: Point) {
        let delta = current - drag_start;
        let old = self.base.old_properties();
        let source = old.source_point.position + delta;
        let target = old.target_point.position + delta;
        let props = self.base.properties_mut();
        props.source_point.position = source;
        props.target_point.position = target;
        self.update_connections();
    }

    fn hit_test(&self, point: Point) -> bool {
        self.selection.is_selected(point, self)
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        self.renderer.render(self, surface);
    }
}
