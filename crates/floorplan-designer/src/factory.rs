//! Shape-type registry.
//!
//! Maps a type tag to a constructor. One factory belongs to one editing
//! session; the built-in kinds are registered by [`ShapeFactory::new`].

use std::collections::HashMap;
use std::fmt;

use floorplan_core::{Error, FactoryError, ShapeError, ShapeLimits};
use tracing::warn;

use crate::model::{ConnectorData, ImageShapeData, ShapeData, ShapeRecord, TextShapeData, WallData};
use crate::shapes::{Connector, ImageShape, Shape, TextShape, Wall};

/// Builds a live shape from a property bag.
pub type ShapeConstructor = Box<dyn Fn(ShapeData, &ShapeLimits) -> Result<Shape, ShapeError>>;

pub struct ShapeFactory {
    limits: ShapeLimits,
    constructors: HashMap<String, ShapeConstructor>,
}

impl fmt::Debug for ShapeFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        tags.sort_unstable();
        f.debug_struct("ShapeFactory")
            .field("limits", &self.limits)
            .field("types", &tags)
            .finish()
    }
}

impl ShapeFactory {
    /// Creates a factory with `wall`, `text`, `image` and `connector` registered.
    pub fn new(limits: ShapeLimits) -> Self {
        let mut constructors: HashMap<String, ShapeConstructor> = HashMap::new();
        constructors.insert(
            WallData::KIND.to_string(),
            Box::new(|data: ShapeData, limits: &ShapeLimits| {
                Wall::new(WallData::from_data(data)?, *limits).map(Shape::Wall)
            }),
        );
        constructors.insert(
            TextShapeData::KIND.to_string(),
            Box::new(|data: ShapeData, limits: &ShapeLimits| {
                TextShape::new(TextShapeData::from_data(data)?, *limits).map(Shape::Text)
            }),
        );
        constructors.insert(
            ImageShapeData::KIND.to_string(),
            Box::new(|data: ShapeData, limits: &ShapeLimits| {
                ImageShape::new(ImageShapeData::from_data(data)?, *limits).map(Shape::Image)
            }),
        );
        constructors.insert(
            ConnectorData::KIND.to_string(),
            Box::new(|data: ShapeData, limits: &ShapeLimits| {
                Connector::new(ConnectorData::from_data(data)?, *limits).map(Shape::Connector)
            }),
        );
        Self {
            limits,
            constructors,
        }
    }

    pub fn limits(&self) -> &ShapeLimits {
        &self.limits
    }

    /// Registers a constructor under `type_tag`.
    ///
    /// # Errors
    /// [`FactoryError::DuplicateType`] when the tag is already taken; the
    /// existing constructor is kept.
    pub fn register(
        &mut self,
        type_tag: impl Into<String>,
        constructor: ShapeConstructor,
    ) -> Result<(), FactoryError> {
        let type_tag = type_tag.into();
        if self.constructors.contains_key(&type_tag) {
            warn!("Rejected duplicate registration of shape type '{}'", type_tag);
            return Err(FactoryError::DuplicateType { type_tag });
        }
        self.constructors.insert(type_tag, constructor);
        Ok(())
    }

    pub fn has(&self, type_tag: &str) -> bool {
        self.constructors.contains_key(type_tag)
    }

    /// Builds a shape of the registered type from `data`.
    ///
    /// # Errors
    /// [`FactoryError::UnknownType`] for an unregistered tag, or the
    /// constructor's [`ShapeError`].
    pub fn create(&self, type_tag: &str, data: ShapeData) -> Result<Shape, Error> {
        let constructor =
            self.constructors
                .get(type_tag)
                .ok_or_else(|| FactoryError::UnknownType {
                    type_tag: type_tag.to_string(),
                })?;
        Ok(constructor(data, &self.limits)?)
    }
}
