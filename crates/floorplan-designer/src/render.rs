//! Render strategies.
//!
//! Shapes do not draw themselves onto any particular backend. A render
//! strategy reads the shape's current state and emits [`DrawPrimitive`]s into
//! a [`RenderSurface`]; vector outlines are built as `lyon` paths so any
//! tessellating or rasterizing backend can consume them.

use floorplan_core::Point;
use lyon::math::{point, Box2D};
use lyon::path::{Path, Winding};

use crate::model::{ConnectionPoint, HandleProperties, ShapeStyle, TextAlign, TextStyle};
use crate::shapes::{Connector, DesignerShape, ImageShape, TextShape, Wall};

const CONNECTOR_DOT_RADIUS: f64 = 4.0;
const CONNECTOR_DOT_COLOR: &str = "#4CAF50";
const ANCHOR_RADIUS: f64 = 16.0;
const ANCHOR_FILL: &str = "#4A90E2";
const ANCHOR_STROKE: &str = "#FFFFFF";

/// One drawing instruction handed to a rendering backend.
#[derive(Debug, Clone)]
pub enum DrawPrimitive {
    /// A vector outline, filled and/or stroked
    Path {
        path: Path,
        fill: Option<String>,
        stroke: Option<String>,
        stroke_width: f64,
    },
    /// A block of text; `anchor` is the reference point of the first line
    Text {
        text: String,
        anchor: Point,
        max_width: f64,
        font_family: String,
        font_size: f64,
        line_height: f64,
        align: TextAlign,
        color: String,
    },
    /// A raster image stretched over a box
    Image {
        src: String,
        top_left: Point,
        width: f64,
        height: f64,
    },
}

/// Receiver of drawing primitives.
pub trait RenderSurface {
    fn draw(&mut self, primitive: DrawPrimitive);
}

/// Records primitives in order, for tests and headless use.
impl RenderSurface for Vec<DrawPrimitive> {
    fn draw(&mut self, primitive: DrawPrimitive) {
        self.push(primitive);
    }
}

/// Draw routine for one kind of shape. Reads the shape, never mutates it.
pub trait RenderStrategy<S: ?Sized> {
    fn render(&self, shape: &S, surface: &mut dyn RenderSurface);
}

fn to_lyon(p: Point) -> lyon::math::Point {
    point(p.x as f32, p.y as f32)
}

fn polygon_path(points: &[Point]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut builder = Path::builder();
    builder.begin(to_lyon(*first));
    for p in rest {
        builder.line_to(to_lyon(*p));
    }
    builder.end(true);
    Some(builder.build())
}

fn rect_path(top_left: Point, bottom_right: Point) -> Path {
    let mut builder = Path::builder();
    builder.add_rectangle(
        &Box2D::new(to_lyon(top_left), to_lyon(bottom_right)),
        Winding::Positive,
    );
    builder.build()
}

fn circle_path(center: Point, radius: f64) -> Path {
    let mut builder = Path::builder();
    builder.add_circle(to_lyon(center), radius as f32, Winding::Positive);
    builder.build()
}

fn styled(path: Path, style: &ShapeStyle, fill: Option<String>) -> DrawPrimitive {
    DrawPrimitive::Path {
        path,
        fill,
        stroke: Some(style.stroke_color.clone()),
        stroke_width: style.stroke_width,
    }
}

/// Circles at each handle, styled by the shape's handle properties
fn render_handles(
    handles: &[Point],
    handle_properties: Option<&HandleProperties>,
    surface: &mut dyn RenderSurface,
) {
    let defaults = HandleProperties::default();
    let props = handle_properties.unwrap_or(&defaults);
    for h in handles {
        surface.draw(styled(
            circle_path(*h, props.size),
            &props.style,
            Some(props.style.fill_color.clone()),
        ));
    }
}

/// Anchor markers for a selected shape's connection points
fn render_connection_points(points: &[ConnectionPoint], surface: &mut dyn RenderSurface) {
    for cp in points {
        surface.draw(DrawPrimitive::Path {
            path: circle_path(cp.position, ANCHOR_RADIUS),
            fill: Some(ANCHOR_FILL.to_string()),
            stroke: Some(ANCHOR_STROKE.to_string()),
            stroke_width: 1.0,
        });
    }
}

/// Draws a wall as a quadrilateral offset by half its thickness on both sides
/// of the center line.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallRenderer;

impl RenderStrategy<Wall> for WallRenderer {
    fn render(&self, wall: &Wall, surface: &mut dyn RenderSurface) {
        let start = wall.start();
        let end = wall.end();
        let length = wall.length();
        if length == 0.0 {
            return;
        }

        let d = end - start;
        let half = wall.thickness() / 2.0;
        let perp = Point::new(-d.y / length * half, d.x / length * half);

        let outline = [start + perp, end + perp, end - perp, start - perp];
        let style = &wall.wall_data().common.style;
        let fill = if wall.is_hovered() || wall.is_selected() {
            style
                .highlight_color
                .clone()
                .unwrap_or_else(|| style.fill_color.clone())
        } else {
            style.fill_color.clone()
        };

        if let Some(path) = polygon_path(&outline) {
            surface.draw(styled(path, style, Some(fill)));
        }

        if wall.is_selected() {
            render_handles(
                &wall.handles(),
                wall.wall_data().common.handle_properties.as_ref(),
                surface,
            );
        }
    }
}

/// Where the first line of text sits inside the box, given alignment and
/// padding.
fn text_anchor(shape: &TextShape, style: &TextStyle, line_height: f64) -> Point {
    let geo = shape.geometry();
    let pad = style.insets();
    let position = shape.position();
    let available_height = shape.height() - (pad.top + pad.bottom);

    let x = match style.text_align {
        TextAlign::Left => geo.top_left.x + pad.left,
        TextAlign::Center => position.x + (pad.left - pad.right) / 2.0,
        TextAlign::Right => geo.top_left.x + shape.width() - pad.right,
    };
    let y = position.y - available_height / 2.0 + line_height / 2.0 + (pad.top - pad.bottom) / 2.0;
    Point::new(x, y)
}

/// Draws the text container, then the text, then handles when selected.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl RenderStrategy<TextShape> for TextRenderer {
    fn render(&self, shape: &TextShape, surface: &mut dyn RenderSurface) {
        let data = shape.text_data();
        let style = &data.common.style;
        let text_style = &data.text_style;

        if shape.is_selected() {
            render_connection_points(shape.connection_points(), surface);
        }

        let geo = shape.geometry();
        surface.draw(styled(
            rect_path(geo.top_left, geo.bottom_right),
            style,
            Some(style.fill_color.clone()),
        ));

        let pad = text_style.insets();
        let line_height = text_style.font_size * text_style.line_height();
        surface.draw(DrawPrimitive::Text {
            text: data.text.clone(),
            anchor: text_anchor(shape, text_style, line_height),
            max_width: shape.width() - (pad.left + pad.right),
            font_family: text_style.font_family.clone(),
            font_size: text_style.font_size,
            line_height,
            align: text_style.text_align,
            color: text_style.text_color.clone(),
        });

        if shape.is_selected() {
            render_handles(
                &shape.handles(),
                data.common.handle_properties.as_ref(),
                surface,
            );
        }
    }
}

/// Draws a white container box with the image stretched over it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageRenderer;

impl RenderStrategy<ImageShape> for ImageRenderer {
    fn render(&self, shape: &ImageShape, surface: &mut dyn RenderSurface) {
        if shape.is_selected() {
            render_connection_points(shape.connection_points(), surface);
        }

        let geo = shape.geometry();
        surface.draw(styled(
            rect_path(geo.top_left, geo.bottom_right),
            &ShapeStyle::default(),
            Some("#ffffff".to_string()),
        ));
        surface.draw(DrawPrimitive::Image {
            src: shape.image().src.clone(),
            top_left: geo.top_left,
            width: geo.width(),
            height: geo.height(),
        });

        if shape.is_selected() {
            render_handles(
                &shape.handles(),
                shape.image_shape_data().common.handle_properties.as_ref(),
                surface,
            );
        }
    }
}

/// Draws the connector path followed by a dot at each end.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectorRenderer;

impl RenderStrategy<Connector> for ConnectorRenderer {
    fn render(&self, connector: &Connector, surface: &mut dyn RenderSurface) {
        let source = connector.source().position;
        let target = connector.target().position;

        let mut builder = Path::builder();
        builder.begin(to_lyon(source));
        match connector.control_point() {
            Some(control) => {
                builder.quadratic_bezier_to(to_lyon(control), to_lyon(target));
            }
            None => {
                builder.line_to(to_lyon(target));
            }
        }
        builder.end(false);

        let style = &connector.connector_data().common.style;
        surface.draw(styled(builder.build(), style, None));

        for end in [source, target] {
            surface.draw(DrawPrimitive::Path {
                path: circle_path(end, CONNECTOR_DOT_RADIUS),
                fill: Some(CONNECTOR_DOT_COLOR.to_string()),
                stroke: None,
                stroke_width: 0.0,
            });
        }
    }
}
