use floorplan_core::{Bounds, Point, ShapeError, ShapeLimits};

use super::rectangular::{rectangular_handles, resize_rectangle};
use super::{BaseShape, ShapeKind};
use crate::model::{RectangularGeometry, TextShapeData, TextStyle};
use crate::render::{RenderStrategy, RenderSurface, TextRenderer};
use crate::selection::{RectangularSelection, SelectionStrategy};

/// A text annotation laid out inside a resizable box.
#[derive(Debug, Clone)]
pub struct TextShape {
    base: BaseShape<TextShapeData>,
    limits: ShapeLimits,
    selection: RectangularSelection,
    renderer: TextRenderer,
}

impl TextShape {
    /// Builds a text box, normalizing its corners and enforcing the minimum
    /// construction size.
    ///
    /// Inverted corners are swapped component-wise, then the bottom-right
    /// corner is pushed out until the box is at least
    /// `text_min_width` x `text_min_height`. A box whose corners coincide is
    /// rejected.
    pub fn new(mut data: TextShapeData, limits: ShapeLimits) -> Result<Self, ShapeError> {
        if data.geometry.top_left == data.geometry.bottom_right {
            return Err(ShapeError::DegenerateGeometry {
                reason: "text box corners coincide".to_string(),
            });
        }

        let mut geo = data.geometry.normalized();
        if geo.width() < limits.text_min_width {
            geo.bottom_right.x = geo.top_left.x + limits.text_min_width;
        }
        if geo.height() < limits.text_min_height {
            geo.bottom_right.y = geo.top_left.y + limits.text_min_height;
        }
        data.geometry = geo;
        data.common.position = geo.center();

        let mut shape = Self {
            base: BaseShape::new(data),
            limits,
            selection: RectangularSelection,
            renderer: TextRenderer,
        };
        shape.refresh_connection_points();
        Ok(shape)
    }

    pub fn text_data(&self) -> &TextShapeData {
        self.base.properties()
    }

    pub fn text(&self) -> &str {
        &self.base.properties().text
    }

    pub fn text_style(&self) -> &TextStyle {
        &self.base.properties().text_style
    }

    pub fn geometry(&self) -> &RectangularGeometry {
        &self.base.properties().geometry
    }

    pub fn width(&self) -> f64 {
        self.geometry().width()
    }

    pub fn height(&self) -> f64 {
        self.geometry().height()
    }

    /// Replaces the text content
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.base.properties_mut().text = text.into();
    }
}

impl ShapeKind for TextShape {
    type Data = TextShapeData;

    fn base(&self) -> &BaseShape<TextShapeData> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseShape<TextShapeData> {
        &mut self.base
    }

    fn limits(&self) -> &ShapeLimits {
        &self.limits
    }

    fn bounds_of(data: &TextShapeData) -> Option<Bounds> {
        Some(data.geometry.bounds())
    }

    fn handles_of(data: &TextShapeData) -> Vec<Point> {
        rectangular_handles(&data.geometry)
    }

    fn derive(&self, data: &mut TextShapeData) {
        data.geometry = data.geometry.normalized();
        data.common.position = data.geometry.center();
    }

    fn apply_handle(&mut self, index: usize, pointer: Point) -> Result<(), ShapeError> {
        let geo = resize_rectangle(
            &self.base.old_properties().geometry,
            index,
            pointer,
            self.limits.min_resize,
        )?;
        let props = self.base.properties_mut();
        props.geometry = geo;
        props.common.position = geo.center();
        Ok(())
    }

    fn apply_move(&mut self, drag_start: Point, current: Point) {
        let delta = current - drag_start;
        let geo = self.base.old_properties().geometry.translated(delta.x, delta.y);
        let props = self.base.properties_mut();
        props.geometry = geo;
        props.common.position = geo.center();
    }

    fn hit_test(&self, point: Point) -> bool {
        self.selection.is_selected(point, self)
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        self.renderer.render(self, surface);
    }
}
