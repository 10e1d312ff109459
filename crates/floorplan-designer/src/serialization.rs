//! Serialization and deserialization for plan files.
//!
//! A plan file is JSON holding every shape's property bag together with its
//! type tag and stacking position. Undo history is never persisted.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use floorplan_core::ShapeId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::manager::ShapeManager;
use crate::model::ShapeData;
use crate::shapes::DesignerShape;

/// Plan file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete plan file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanFile {
    pub version: String,
    pub metadata: PlanMetadata,
    #[serde(default)]
    pub shapes: Vec<PlanEntry>,
}

/// Plan metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

/// One persisted shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    /// Factory tag the shape is rebuilt with
    pub shape_type: String,
    #[serde(default)]
    pub z_index: i64,
    pub data: ShapeData,
}

impl PlanFile {
    /// Create an empty plan file
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: PlanMetadata {
                name: name.into(),
                created: now,
                modified: now,
                author: String::new(),
                description: String::new(),
            },
            shapes: Vec::new(),
        }
    }

    /// Save plan to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize plan")?;

        std::fs::write(path.as_ref(), json).context("Failed to write plan file")?;

        Ok(())
    }

    /// Load plan from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read plan file {}", path.as_ref().display()))?;

        let plan: PlanFile = serde_json::from_str(&content).context("Failed to parse plan file")?;

        Ok(plan)
    }
}

impl ShapeManager {
    /// Snapshots every shape, in z-order, into a new plan file.
    pub fn to_plan_file(&self, name: impl Into<String>) -> PlanFile {
        let mut plan = PlanFile::new(name);
        plan.shapes = self
            .shapes()
            .into_iter()
            .map(|(_, shape)| PlanEntry {
                shape_type: shape.kind().to_string(),
                z_index: shape.z_index(),
                data: shape.data(),
            })
            .collect();
        plan
    }

    /// Replaces the whole collection with the shapes of `plan`.
    ///
    /// History is cleared; loading is not undoable. Shapes without an id get
    /// a fresh one.
    ///
    /// Every entry is rebuilt before the collection is touched, so a failing
    /// plan leaves the current shapes and history as they were.
    pub fn load_plan_file(&mut self, plan: &PlanFile) -> Result<()> {
        let mut seen = HashSet::with_capacity(plan.shapes.len());
        let mut staged = Vec::with_capacity(plan.shapes.len());
        for entry in &plan.shapes {
            let mut data = entry.data.clone();
            let id = data
                .common_mut()
                .id
                .get_or_insert_with(ShapeId::generate)
                .clone();
            if !seen.insert(id.clone()) {
                bail!("Duplicate shape id {id} in plan");
            }
            let mut shape = self
                .factory()
                .create(&entry.shape_type, data)
                .with_context(|| format!("Failed to rebuild shape {id}"))?;
            shape.set_z_index(entry.z_index);
            staged.push((id, shape));
        }

        self.clear();
        for (id, shape) in staged {
            self.store_mut()
                .add_directly(id.clone(), shape)
                .with_context(|| format!("Failed to insert shape {id}"))?;
        }
        debug!(
            "Loaded plan '{}' with {} shapes",
            plan.metadata.name,
            plan.shapes.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WallData;
    use floorplan_core::{Point, ShapeLimits};

    #[test]
    fn test_new_plan_has_current_version() {
        let plan = PlanFile::new("Ground floor");
        assert_eq!(plan.version, "1.0");
        assert_eq!(plan.metadata.created, plan.metadata.modified);
        assert!(plan.shapes.is_empty());
    }

    #[test]
    fn test_load_keeps_ids_and_clears_history() {
        let mut manager = ShapeManager::new(ShapeLimits::default());
        let data = WallData::new(Point::new(0.0, 0.0), Point::new(50.0, 0.0), 8.0);
        let id = manager.add_shape("wall", ShapeData::Wall(data)).unwrap();
        let plan = manager.to_plan_file("test");

        let mut other = ShapeManager::new(ShapeLimits::default());
        other.load_plan_file(&plan).unwrap();
        assert!(!other.can_undo());
        assert_eq!(other.shape(&id).unwrap().data(), manager.shape(&id).unwrap().data());
    }

    #[test]
    fn test_unknown_shape_type_fails_to_load() {
        let mut plan = PlanFile::new("bad");
        plan.shapes.push(PlanEntry {
            shape_type: "door".to_string(),
            z_index: 0,
            data: ShapeData::Wall(WallData::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), 1.0)),
        });
        let mut manager = ShapeManager::new(ShapeLimits::default());
        assert!(manager.load_plan_file(&plan).is_err());
    }

    fn wall_entry(shape_type: &str, x: f64) -> PlanEntry {
        PlanEntry {
            shape_type: shape_type.to_string(),
            z_index: 0,
            data: ShapeData::Wall(WallData::new(Point::new(x, 0.0), Point::new(x + 50.0, 0.0), 5.0)),
        }
    }

    #[test]
    fn test_failed_load_keeps_current_shapes() {
        let mut manager = ShapeManager::new(ShapeLimits::default());
        let data = WallData::new(Point::new(0.0, 100.0), Point::new(80.0, 100.0), 10.0);
        let id = manager.add_shape("wall", ShapeData::Wall(data)).unwrap();

        let mut plan = PlanFile::new("broken");
        plan.shapes.push(wall_entry("wall", 0.0));
        plan.shapes.push(wall_entry("door", 200.0));

        assert!(manager.load_plan_file(&plan).is_err());
        assert_eq!(manager.len(), 1);
        assert!(manager.shape(&id).is_some());
        assert!(manager.can_undo());
    }

    #[test]
    fn test_duplicate_ids_fail_to_load() {
        let mut first = wall_entry("wall", 0.0);
        first.data.common_mut().id = Some(ShapeId::from("w1"));
        let mut second = wall_entry("wall", 100.0);
        second.data.common_mut().id = Some(ShapeId::from("w1"));

        let mut plan = PlanFile::new("dupes");
        plan.shapes = vec![first, second];

        let mut manager = ShapeManager::new(ShapeLimits::default());
        let err = manager.load_plan_file(&plan).unwrap_err();
        assert!(err.to_string().contains("Duplicate shape id w1"));
        assert!(manager.is_empty());
    }
}
