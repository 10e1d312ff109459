//! Shape data model: geometry, style, metadata and the per-kind property bags.

mod data;
mod geometry;
mod metadata;
mod style;

pub use data::{
    ConnectionKind, ConnectionPoint, ConnectorData, ConnectorRoute, ImageData, ImageShapeData,
    ShapeData, ShapeProperties, ShapeRecord, TextShapeData, WallData,
};
pub use geometry::{
    ArcGeometry, CircleGeometry, Geometry, LineGeometry, PolygonGeometry, RectangularGeometry,
};
pub use metadata::ShapeMetadata;
pub use style::{
    FontStyle, FontWeight, HandleProperties, Insets, Padding, ShapeStyle, TextAlign,
    TextBaseline, TextShadow, TextStyle, DEFAULT_HANDLE_SIZE, DEFAULT_LINE_HEIGHT,
    DEFAULT_TEXT_PADDING,
};
