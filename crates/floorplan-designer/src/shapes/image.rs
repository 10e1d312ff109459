use floorplan_core::{Bounds, Point, ShapeError, ShapeLimits};

use super::rectangular::{rectangular_handles, resize_rectangle};
use super::{BaseShape, ShapeKind};
use crate::model::{ImageData, ImageShapeData, RectangularGeometry};
use crate::render::{ImageRenderer, RenderStrategy, RenderSurface};
use crate::selection::{RectangularSelection, SelectionStrategy};

/// A placed raster image.
///
/// Resizing keeps `image_data.width`/`height` equal to the displayed box.
#[derive(Debug, Clone)]
pub struct ImageShape {
    base: BaseShape<ImageShapeData>,
    limits: ShapeLimits,
    selection: RectangularSelection,
    renderer: ImageRenderer,
}

impl ImageShape {
    pub fn new(mut data: ImageShapeData, limits: ShapeLimits) -> Result<Self, ShapeError> {
        let geo = data.geometry.normalized();
        data.geometry = geo;
        data.common.position = geo.center();

        let mut shape = Self {
            base: BaseShape::new(data),
            limits,
            selection: RectangularSelection,
            renderer: ImageRenderer,
        };
        shape.refresh_connection_points();
        Ok(shape)
    }

    pub fn image_shape_data(&self) -> &ImageShapeData {
        self.base.properties()
    }

    pub fn image(&self) -> &ImageData {
        &self.base.properties().image_data
    }

    pub fn geometry(&self) -> &RectangularGeometry {
        &self.base.properties().geometry
    }

    /// Whether handle drags may change the box; defaults to true
    pub fn is_resizable(&self) -> bool {
        self.base.properties().is_resizable.unwrap_or(true)
    }
}

impl ShapeKind for ImageShape {
    type Data = ImageShapeData;

    fn base(&self) -> &BaseShape<ImageShapeData> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseShape<ImageShapeData> {
        &mut self.base
    }

    fn limits(&self) -> &ShapeLimits {
        &self.limits
    }

    fn bounds_of(data: &ImageShapeData) -> Option<Bounds> {
        Some(data.geometry.bounds())
    }

    fn handles_of(data: &ImageShapeData) -> Vec<Point> {
        rectangular_handles(&data.geometry)
    }

    fn derive(&self, data: &mut ImageShapeData) {
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
        if !self.is_resizable() {
            return Ok(());
        }
        let props = self.base.properties_mut();
        props.geometry = geo;
        props.common.position = geo.center();
        props.image_data.width = geo.width();
        props.image_data.height = geo.height();
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
