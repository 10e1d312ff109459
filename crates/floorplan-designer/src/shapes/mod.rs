//! Shape objects.
//!
//! Each concrete shape owns a [`BaseShape`] with its property bag and composes
//! one selection strategy and one render strategy. [`Shape`] is the closed sum
//! of the built-in kinds and is what the manager stores.

mod base;
mod connector;
mod image;
mod rectangular;
mod text;
mod wall;

pub use base::BaseShape;
pub use connector::Connector;
pub use image::ImageShape;
pub use rectangular::{rectangular_handles, resize_rectangle};
pub use text::TextShape;
pub use wall::Wall;

use floorplan_core::geometry::point_in_circle;
use floorplan_core::{Bounds, Point, ShapeError, ShapeId, ShapeLimits};

use crate::model::{ConnectionPoint, ShapeData, ShapeRecord};
use crate::render::RenderSurface;

/// Operations every shape supports, independent of its kind.
pub trait DesignerShape {
    /// Type tag of the shape's kind ("wall", "text", ...)
    fn kind(&self) -> &'static str;
    fn id(&self) -> Option<&ShapeId>;
    fn position(&self) -> Point;

    /// Normalized axis-aligned bounds, `None` when the geometry has none
    fn bounds(&self) -> Option<Bounds>;

    /// Handles of the live geometry, in their fixed order
    fn handles(&self) -> Vec<Point>;

    /// Handles of the frozen baseline geometry
    fn old_handles(&self) -> Vec<Point>;

    /// Hit radius of a handle
    fn handle_size(&self) -> f64;

    /// Moves one handle to `pointer`, computed against the frozen baseline.
    fn update_handle(&mut self, index: usize, pointer: Point) -> Result<(), ShapeError>;

    /// Translates the whole shape by `current - drag_start`, applied to the
    /// frozen baseline rather than the live geometry.
    fn move_to(&mut self, drag_start: Point, current: Point);

    fn is_point_inside(&self, point: Point) -> bool;

    /// Freezes the live property bag as the new baseline
    fn capture_state(&mut self);

    /// Replaces the live property bag with a copy of `data`; derived fields
    /// such as `position` are recomputed from the geometry.
    fn restore_state(&mut self, data: ShapeData) -> Result<(), ShapeError>;

    /// Copy of the live property bag
    fn data(&self) -> ShapeData;

    /// Copy of the frozen baseline
    fn old_data(&self) -> ShapeData;

    /// Emits drawing primitives for the current state. Never mutates the shape.
    fn render(&self, surface: &mut dyn RenderSurface);

    fn z_index(&self) -> i64;
    fn set_z_index(&mut self, z_index: i64);
    fn is_selected(&self) -> bool;
    fn set_selected(&mut self, selected: bool);
    fn is_hovered(&self) -> bool;
    fn set_hovered(&mut self, hovered: bool);
    fn connection_points(&self) -> &[ConnectionPoint];

    fn handle_position(&self, index: usize) -> Result<Point, ShapeError> {
        let handles = self.handles();
        handles
            .get(index)
            .copied()
            .ok_or(ShapeError::InvalidHandleIndex {
                index,
                count: handles.len(),
            })
    }

    fn old_handle_position(&self, index: usize) -> Result<Point, ShapeError> {
        let handles = self.old_handles();
        handles
            .get(index)
            .copied()
            .ok_or(ShapeError::InvalidHandleIndex {
                index,
                count: handles.len(),
            })
    }

    /// First handle, in handle order, whose hit circle contains `point`
    fn handle_at_point(&self, point: Point) -> Option<usize> {
        let radius = self.handle_size();
        self.handles()
            .iter()
            .position(|h| point_in_circle(point, *h, radius))
    }
}

/// Kind-specific behaviour of a concrete shape over its [`BaseShape`].
///
/// Every `ShapeKind` is a [`DesignerShape`]; the shared state handling lives
/// in the blanket implementation below.
pub trait ShapeKind {
    type Data: ShapeRecord;

    fn base(&self) -> &BaseShape<Self::Data>;
    fn base_mut(&mut self) -> &mut BaseShape<Self::Data>;
    fn limits(&self) -> &ShapeLimits;

    fn bounds_of(data: &Self::Data) -> Option<Bounds>;
    fn handles_of(data: &Self::Data) -> Vec<Point>;

    /// Recomputes the derived fields of `data` (position, normalized corners,
    /// control points) from its governing geometry.
    fn derive(&self, data: &mut Self::Data);

    /// Kind-specific handle update; connection points are refreshed by the caller
    fn apply_handle(&mut self, index: usize, pointer: Point) -> Result<(), ShapeError>;
    fn apply_move(&mut self, drag_start: Point, current: Point);
    fn hit_test(&self, point: Point) -> bool;
    fn draw(&self, surface: &mut dyn RenderSurface);

    fn refresh_connection_points(&mut self) {
        let bounds = Self::bounds_of(self.base().properties());
        self.base_mut().refresh_connection_points(bounds);
    }
}

impl<T: ShapeKind> DesignerShape for T {
    fn kind(&self) -> &'static str {
        T::Data::KIND
    }

    fn id(&self) -> Option<&ShapeId> {
        self.base().id()
    }

    fn position(&self) -> Point {
        self.base().position()
    }

    fn bounds(&self) -> Option<Bounds> {
        T::bounds_of(self.base().properties())
    }

    fn handles(&self) -> Vec<Point> {
        T::handles_of(self.base().properties())
    }

    fn old_handles(&self) -> Vec<Point> {
        T::handles_of(self.base().old_properties())
    }

    fn handle_size(&self) -> f64 {
        self.base()
            .properties()
            .common()
            .handle_size(self.limits().handle_size)
    }

    fn update_handle(&mut self, index: usize, pointer: Point) -> Result<(), ShapeError> {
        self.apply_handle(index, pointer)?;
        self.refresh_connection_points();
        Ok(())
    }

    fn move_to(&mut self, drag_start: Point, current: Point) {
        self.apply_move(drag_start, current);
        self.refresh_connection_points();
    }

    fn is_point_inside(&self, point: Point) -> bool {
        self.hit_test(point)
    }

    fn capture_state(&mut self) {
        self.base_mut().capture_state();
        self.refresh_connection_points();
    }

    fn restore_state(&mut self, data: ShapeData) -> Result<(), ShapeError> {
        let mut data = T::Data::from_data(data)?;
        self.derive(&mut data);
        self.base_mut().restore_state(data);
        self.refresh_connection_points();
        Ok(())
    }

    fn data(&self) -> ShapeData {
        self.base().properties().clone().into_data()
    }

    fn old_data(&self) -> ShapeData {
        self.base().old_properties().clone().into_data()
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        self.draw(surface);
    }

    fn z_index(&self) -> i64 {
        self.base().z_index()
    }

    fn set_z_index(&mut self, z_index: i64) {
        self.base_mut().set_z_index(z_index);
    }

    fn is_selected(&self) -> bool {
        self.base().is_selected()
    }

    fn set_selected(&mut self, selected: bool) {
        self.base_mut().set_selected(selected);
    }

    fn is_hovered(&self) -> bool {
        self.base().is_hovered()
    }

    fn set_hovered(&mut self, hovered: bool) {
        self.base_mut().set_hovered(hovered);
    }

    fn connection_points(&self) -> &[ConnectionPoint] {
        self.base().connection_points()
    }
}

/// A live shape of one of the built-in kinds.
#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum Shape {
    Wall(Wall),
    Text(TextShape),
    Image(ImageShape),
    Connector(Connector),
}

impl Shape {
    /// Builds the shape matching the kind of `data`
    pub fn from_data(data: ShapeData, limits: ShapeLimits) -> Result<Self, ShapeError> {
        match data {
            ShapeData::Wall(d) => Wall::new(d, limits).map(Shape::Wall),
            ShapeData::Text(d) => TextShape::new(d, limits).map(Shape::Text),
            ShapeData::Image(d) => ImageShape::new(d, limits).map(Shape::Image),
            ShapeData::Connector(d) => Connector::new(d, limits).map(Shape::Connector),
        }
    }

    pub fn as_wall(&self) -> Option<&Wall> {
        match self {
            Shape::Wall(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextShape> {
        match self {
            Shape::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageShape> {
        match self {
            Shape::Image(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_connector(&self) -> Option<&Connector> {
        match self {
            Shape::Connector(s) => Some(s),
            _ => None,
        }
    }
}

impl DesignerShape for Shape {
    fn kind(&self) -> &'static str {
        match self {
            Shape::Wall(s) => s.kind(),
            Shape::Text(s) => s.kind(),
            Shape::Image(s) => s.kind(),
            Shape::Connector(s) => s.kind(),
        }
    }

    fn id(&self) -> Option<&ShapeId> {
        match self {
            Shape::Wall(s) => s.id(),
            Shape::Text(s) => s.id(),
            Shape::Image(s) => s.id(),
            Shape::Connector(s) => s.id(),
        }
    }

    fn position(&self) -> Point {
        match self {
            Shape::Wall(s) => s.position(),
            Shape::Text(s) => s.position(),
            Shape::Image(s) => s.position(),
            Shape::Connector(s) => s.position(),
        }
    }

    fn bounds(&self) -> Option<Bounds> {
        match self {
            Shape::Wall(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
            Shape::Image(s) => s.bounds(),
            Shape::Connector(s) => s.bounds(),
        }
    }

    fn handles(&self) -> Vec<Point> {
        match self {
            Shape::Wall(s) => s.handles(),
            Shape::Text(s) => s.handles(),
            Shape::Image(s) => s.handles(),
            Shape::Connector(s) => s.handles(),
        }
    }

    fn old_handles(&self) -> Vec<Point> {
        match self {
            Shape::Wall(s) => s.old_handles(),
            Shape::Text(s) => s.old_handles(),
            Shape::Image(s) => s.old_handles(),
            Shape::Connector(s) => s.old_handles(),
        }
    }

    fn handle_size(&self) -> f64 {
        match self {
            Shape::Wall(s) => s.handle_size(),
            Shape::Text(s) => s.handle_size(),
            Shape::Image(s) => s.handle_size(),
            Shape::Connector(s) => s.handle_size(),
        }
    }

    fn update_handle(&mut self, index: usize, pointer: Point) -> Result<(), ShapeError> {
        match self {
            Shape::Wall(s) => DesignerShape::update_handle(s, index, pointer),
            Shape::Text(s) => DesignerShape::update_handle(s, index, pointer),
            Shape::Image(s) => DesignerShape::update_handle(s, index, pointer),
            Shape::Connector(s) => DesignerShape::update_handle(s, index, pointer),
        }
    }

    fn move_to(&mut self, drag_start: Point, current: Point) {
        match self {
            Shape::Wall(s) => DesignerShape::move_to(s, drag_start, current),
            Shape::Text(s) => DesignerShape::move_to(s, drag_start, current),
            Shape::Image(s) => DesignerShape::move_to(s, drag_start, current),
            Shape::Connector(s) => DesignerShape::move_to(s, drag_start, current),
        }
    }

    fn is_point_inside(&self, point: Point) -> bool {
        match self {
            Shape::Wall(s) => DesignerShape::is_point_inside(s, point),
            Shape::Text(s) => DesignerShape::is_point_inside(s, point),
            Shape::Image(s) => DesignerShape::is_point_inside(s, point),
            Shape::Connector(s) => DesignerShape::is_point_inside(s, point),
        }
    }

    fn capture_state(&mut self) {
        match self {
            Shape::Wall(s) => s.capture_state(),
            Shape::Text(s) => s.capture_state(),
            Shape::Image(s) => s.capture_state(),
            Shape::Connector(s) => s.capture_state(),
        }
    }

    fn restore_state(&mut self, data: ShapeData) -> Result<(), ShapeError> {
        match self {
            Shape::Wall(s) => s.restore_state(data),
            Shape::Text(s) => s.restore_state(data),
            Shape::Image(s) => s.restore_state(data),
            Shape::Connector(s) => s.restore_state(data),
        }
    }

    fn data(&self) -> ShapeData {
        match self {
            Shape::Wall(s) => s.data(),
            Shape::Text(s) => s.data(),
            Shape::Image(s) => s.data(),
            Shape::Connector(s) => s.data(),
        }
    }

    fn old_data(&self) -> ShapeData {
        match self {
            Shape::Wall(s) => s.old_data(),
            Shape::Text(s) => s.old_data(),
            Shape::Image(s) => s.old_data(),
            Shape::Connector(s) => s.old_data(),
        }
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        match self {
            Shape::Wall(s) => DesignerShape::render(s, surface),
            Shape::Text(s) => DesignerShape::render(s, surface),
            Shape::Image(s) => DesignerShape::render(s, surface),
            Shape::Connector(s) => DesignerShape::render(s, surface),
        }
    }

    fn z_index(&self) -> i64 {
        match self {
            Shape::Wall(s) => s.z_index(),
            Shape::Text(s) => s.z_index(),
            Shape::Image(s) => s.z_index(),
            Shape::Connector(s) => s.z_index(),
        }
    }

    fn set_z_index(&mut self, z_index: i64) {
        match self {
            Shape::Wall(s) => s.set_z_index(z_index),
            Shape::Text(s) => s.set_z_index(z_index),
            Shape::Image(s) => s.set_z_index(z_index),
            Shape::Connector(s) => s.set_z_index(z_index),
        }
    }

    fn is_selected(&self) -> bool {
        match self {
            Shape::Wall(s) => s.is_selected(),
            Shape::Text(s) => s.is_selected(),
            Shape::Image(s) => s.is_selected(),
            Shape::Connector(s) => s.is_selected(),
        }
    }

    fn set_selected(&mut self, selected: bool) {
        match self {
            Shape::Wall(s) => s.set_selected(selected),
            Shape::Text(s) => s.set_selected(selected),
            Shape::Image(s) => s.set_selected(selected),
            Shape::Connector(s) => s.set_selected(selected),
        }
    }

    fn is_hovered(&self) -> bool {
        match self {
            Shape::Wall(s) => s.is_hovered(),
            Shape::Text(s) => s.is_hovered(),
            Shape::Image(s) => s.is_hovered(),
            Shape::Connector(s) => s.is_hovered(),
        }
    }

    fn set_hovered(&mut self, hovered: bool) {
        match self {
            Shape::Wall(s) => s.set_hovered(hovered),
            Shape::Text(s) => s.set_hovered(hovered),
            Shape::Image(s) => s.set_hovered(hovered),
            Shape::Connector(s) => s.set_hovered(hovered),
        }
    }

    fn connection_points(&self) -> &[ConnectionPoint] {
        match self {
            Shape::Wall(s) => s.connection_points(),
            Shape::Text(s) => s.connection_points(),
            Shape::Image(s) => s.connection_points(),
            Shape::Connector(s) => s.connection_points(),
        }
    }
}
