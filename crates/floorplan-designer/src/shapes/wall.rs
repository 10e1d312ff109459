use floorplan_core::{Bounds, Point, ShapeError, ShapeLimits};

use super::{BaseShape, ShapeKind};
use crate::model::WallData;
use crate::render::{RenderStrategy, RenderSurface, WallRenderer};
use crate::selection::{SelectionStrategy, WallSelection};

/// A straight wall of a given thickness between two endpoints.
///
/// Handle 0 is the start point, handle 1 the end point.
#[derive(Debug, Clone)]
pub struct Wall {
    base: BaseShape<WallData>,
    limits: ShapeLimits,
    selection: WallSelection,
    renderer: WallRenderer,
}

impl Wall {
    pub fn new(mut data: WallData, limits: ShapeLimits) -> Result<Self, ShapeError> {
        if data.thickness.is_nan() || data.thickness <= 0.0 {
            return Err(ShapeError::InvalidProperty {
                name: "thickness".to_string(),
                reason: format!("must be greater than zero, got {}", data.thickness),
            });
        }
        data.common.position = data.geometry.midpoint();

        let mut wall = Self {
            base: BaseShape::new(data),
            limits,
            selection: WallSelection,
            renderer: WallRenderer,
        };
        wall.refresh_connection_points();
        Ok(wall)
    }

    pub fn wall_data(&self) -> &WallData {
        self.base.properties()
    }

    pub fn start(&self) -> Point {
        self.base.properties().geometry.start
    }

    pub fn end(&self) -> Point {
        self.base.properties().geometry.end
    }

    pub fn thickness(&self) -> f64 {
        self.base.properties().thickness
    }

    pub fn length(&self) -> f64 {
        self.base.properties().geometry.length()
    }

    fn sync_position(&mut self) {
        let mid = self.base.properties().geometry.midpoint();
        self.base.set_position(mid);
    }
}

impl ShapeKind for Wall {
    type Data = WallData;

    fn base(&self) -> &BaseShape<WallData> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseShape<WallData> {
        &mut self.base
    }

    fn limits(&self) -> &ShapeLimits {
        &self.limits
    }

    fn bounds_of(data: &WallData) -> Option<Bounds> {
        Some(Bounds::from_corners(data.geometry.start, data.geometry.end))
    }

    fn handles_of(data: &WallData) -> Vec<Point> {
        vec![data.geometry.start, data.geometry.end]
    }

    fn derive(&self, data: &mut WallData) {
        data.common.position = data.geometry.midpoint();
    }

    fn apply_handle(&mut self, index: usize, pointer: Point) -> Result<(), ShapeError> {
        let geometry = &mut self.base.properties_mut().geometry;
        match index {
            0 => geometry.start = pointer,
            1 => geometry.end = pointer,
            _ => return Err(ShapeError::InvalidHandleIndex { index, count: 2 }),
        }
        self.sync_position();
        Ok(())
    }

    fn apply_move(&mut self, drag_start: Point, current: Point) {
        let delta = current - drag_start;
        let moved = self.base.old_properties().geometry.translated(delta.x, delta.y);
        self.base.properties_mut().geometry = moved;
        self.sync_position();
    }

    fn hit_test(&self, point: Point) -> bool {
        self.selection.is_selected(point, self)
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        self.renderer.render(self, surface);
    }
}
