//! Per-kind property bags.
//!
//! A shape's property bag is its unit of persistence and of undo snapshots:
//! it carries the geometry, style, handle styling, metadata and id, and is
//! cloned (never serialized) to take a snapshot.

use floorplan_core::{Point, ShapeError, ShapeId};
use serde::{Deserialize, Serialize};

use super::geometry::{Geometry, LineGeometry, RectangularGeometry};
use super::metadata::ShapeMetadata;
use super::style::{HandleProperties, ShapeStyle, TextStyle};

/// Fields shared by every kind of shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ShapeId>,
    /// Semantic center, re-derived from the geometry after every edit
    #[serde(default)]
    pub position: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_properties: Option<HandleProperties>,
    #[serde(default)]
    pub style: ShapeStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ShapeMetadata>,
}

impl ShapeProperties {
    /// Handle hit radius, falling back to `default_size` when no handle
    /// properties are set
    pub fn handle_size(&self, default_size: f64) -> f64 {
        self.handle_properties
            .as_ref()
            .map_or(default_size, |h| h.size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallData {
    #[serde(flatten)]
    pub common: ShapeProperties,
    pub geometry: LineGeometry,
    pub thickness: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
}

impl WallData {
    pub fn new(start: Point, end: Point, thickness: f64) -> Self {
        Self {
            common: ShapeProperties::default(),
            geometry: LineGeometry::new(start, end),
            thickness,
            corner_radius: None,
            texture: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextShapeData {
    #[serde(flatten)]
    pub common: ShapeProperties,
    pub geometry: RectangularGeometry,
    pub text: String,
    #[serde(default)]
    pub text_style: TextStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_editable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_resizable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl TextShapeData {
    pub fn new(top_left: Point, bottom_right: Point, text: impl Into<String>) -> Self {
        Self {
            common: ShapeProperties::default(),
            geometry: RectangularGeometry::new(top_left, bottom_right),
            text: text.into(),
            text_style: TextStyle::default(),
            is_editable: None,
            is_resizable: None,
            rotation: None,
        }
    }
}

/// Source reference and dimensions of a placed image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    pub src: String,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natural_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natural_height: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageShapeData {
    #[serde(flatten)]
    pub common: ShapeProperties,
    pub geometry: RectangularGeometry,
    pub image_data: ImageData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_editable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_resizable: Option<bool>,
}

impl ImageShapeData {
    pub fn new(top_left: Point, bottom_right: Point, src: impl Into<String>) -> Self {
        let geometry = RectangularGeometry::new(top_left, bottom_right);
        Self {
            common: ShapeProperties::default(),
            image_data: ImageData {
                src: src.into(),
                width: geometry.width(),
                height: geometry.height(),
                natural_width: None,
                natural_height: None,
            },
            geometry,
            aspect_ratio: None,
            scale_x: None,
            scale_y: None,
            rotation: None,
            is_editable: None,
            is_resizable: None,
        }
    }
}

/// Direction of flow through a connection point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionKind {
    Input,
    Output,
    #[default]
    Bidirectional,
}

/// An anchor where a connector can attach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionPoint {
    pub id: String,
    pub position: Point,
    #[serde(rename = "type", default)]
    pub kind: ConnectionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ShapeId>,
}

impl ConnectionPoint {
    /// A free-standing point with no owning shape
    pub fn free(id: impl Into<String>, position: Point) -> Self {
        Self {
            id: id.into(),
            position,
            kind: ConnectionKind::Bidirectional,
            parent_id: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorRoute {
    #[default]
    Straight,
    Curved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorData {
    #[serde(flatten)]
    pub common: ShapeProperties,
    pub source_point: ConnectionPoint,
    pub target_point: ConnectionPoint,
    #[serde(rename = "type", default)]
    pub route: ConnectorRoute,
    /// Derived from the endpoints; empty for straight connectors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub control_points: Vec<Point>,
}

impl ConnectorData {
    pub fn new(source: Point, target: Point, route: ConnectorRoute) -> Self {
        Self {
            common: ShapeProperties::default(),
            source_point: ConnectionPoint::free("source", source),
            target_point: ConnectionPoint::free("target", target),
            route,
            control_points: Vec::new(),
        }
    }

    pub fn segment(&self) -> LineGeometry {
        LineGeometry::new(self.source_point.position, self.target_point.position)
    }
}

/// Property bag of any shape kind, tagged by `shapeType` when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shapeType", rename_all = "lowercase")]
pub enum ShapeData {
    Wall(WallData),
    Text(TextShapeData),
    Image(ImageShapeData),
    Connector(ConnectorData),
}

impl ShapeData {
    /// The built-in type tag of this bag's kind
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeData::Wall(_) => WallData::KIND,
            ShapeData::Text(_) => TextShapeData::KIND,
            ShapeData::Image(_) => ImageShapeData::KIND,
            ShapeData::Connector(_) => ConnectorData::KIND,
        }
    }

    pub fn common(&self) -> &ShapeProperties {
        match self {
            ShapeData::Wall(d) => &d.common,
            ShapeData::Text(d) => &d.common,
            ShapeData::Image(d) => &d.common,
            ShapeData::Connector(d) => &d.common,
        }
    }

    pub fn common_mut(&mut self) -> &mut ShapeProperties {
        match self {
            ShapeData::Wall(d) => &mut d.common,
            ShapeData::Text(d) => &mut d.common,
            ShapeData::Image(d) => &mut d.common,
            ShapeData::Connector(d) => &mut d.common,
        }
    }

    pub fn id(&self) -> Option<&ShapeId> {
        self.common().id.as_ref()
    }

    pub fn position(&self) -> Point {
        self.common().position
    }

    /// The governing geometry; a connector reports its source-target segment
    pub fn geometry(&self) -> Geometry {
        match self {
            ShapeData::Wall(d) => d.geometry.into(),
            ShapeData::Text(d) => d.geometry.into(),
            ShapeData::Image(d) => d.geometry.into(),
            ShapeData::Connector(d) => d.segment().into(),
        }
    }
}

/// A concrete property-bag type that can be wrapped into and taken out of
/// [`ShapeData`].
pub trait ShapeRecord: Clone + PartialEq + std::fmt::Debug {
    /// Type tag of the kind, also the `shapeType` value on disk
    const KIND: &'static str;

    fn common(&self) -> &ShapeProperties;
    fn common_mut(&mut self) -> &mut ShapeProperties;
    fn into_data(self) -> ShapeData;
    fn from_data(data: ShapeData) -> Result<Self, ShapeError>;
}

fn mismatch(expected: &str, data: &ShapeData) -> ShapeError {
    ShapeError::DataMismatch {
        expected: expected.to_string(),
        found: data.kind().to_string(),
    }
}

impl ShapeRecord for WallData {
    const KIND: &'static str = "wall";

    fn common(&self) -> &ShapeProperties {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ShapeProperties {
        &mut self.common
    }

    fn into_data(self) -> ShapeData {
        ShapeData::Wall(self)
    }

    fn from_data(data: ShapeData) -> Result<Self, ShapeError> {
        match data {
            ShapeData::Wall(d) => Ok(d),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}

impl ShapeRecord for TextShapeData {
    const KIND: &'static str = "text";

    fn common(&self) -> &ShapeProperties {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ShapeProperties {
        &mut self.common
    }

    fn into_data(self) -> ShapeData {
        ShapeData::Text(self)
    }

    fn from_data(data: ShapeData) -> Result<Self, ShapeError> {
        match data {
            ShapeData::Text(d) => Ok(d),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}

impl ShapeRecord for ImageShapeData {
    const KIND: &'static str = "image";

    fn common(&self) -> &ShapeProperties {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ShapeProperties {
        &mut self.common
    }

    fn into_data(self) -> ShapeData {
        ShapeData::Image(self)
    }

    fn from_data(data: ShapeData) -> Result<Self, ShapeError> {
        match data {
            ShapeData::Image(d) => Ok(d),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}

impl ShapeRecord for ConnectorData {
    const KIND: &'static str = "connector";

    fn common(&self) -> &ShapeProperties {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ShapeProperties {
        &mut self.common
    }

    fn into_data(self) -> ShapeData {
        ShapeData::Connector(self)
    }

    fn from_data(data: ShapeData) -> Result<Self, ShapeError> {
        match data {
            ShapeData::Connector(d) => Ok(d),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}
