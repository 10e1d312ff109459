//! Helpers behind the `floorplan` inspection binary.

use anyhow::{Context, Result};
use floorplan_core::{Bounds, Point, ShapeId};
use floorplan_designer::{DesignerShape, PlanFile, Shape, ShapeManager};
use floorplan_settings::EditorSettings;
use std::path::Path;
use tracing::{debug, info};

fn parse_numbers(value: &str, expected: usize) -> Result<Vec<f64>, String> {
    let numbers = value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid number '{}': {}", part.trim(), e))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if numbers.len() != expected {
        return Err(format!(
            "expected {} comma-separated numbers, got {}",
            expected,
            numbers.len()
        ));
    }
    Ok(numbers)
}

/// Parses `X,Y` into a point
pub fn parse_point(value: &str) -> Result<Point, String> {
    let n = parse_numbers(value, 2)?;
    Ok(Point::new(n[0], n[1]))
}

/// Parses `X1,Y1,X2,Y2` into a selection box, keeping the drag direction
pub fn parse_box(value: &str) -> Result<Bounds, String> {
    let n = parse_numbers(value, 4)?;
    Ok(Bounds::new(Point::new(n[0], n[1]), Point::new(n[2], n[3])))
}

/// Builds a manager configured from `settings` and fills it from the plan at `path`.
pub fn open_plan(settings: &EditorSettings, path: &Path) -> Result<ShapeManager> {
    let plan = PlanFile::load_from_file(path)?;
    let mut manager = ShapeManager::with_history_depth(settings.shapes, settings.history.max_depth);
    manager
        .load_plan_file(&plan)
        .with_context(|| format!("Failed to load plan '{}'", plan.metadata.name))?;

    info!(
        "Opened plan '{}' ({} shapes, format {})",
        plan.metadata.name,
        manager.len(),
        plan.version
    );
    Ok(manager)
}

/// One-line description of a shape for terminal output
pub fn describe(id: &ShapeId, shape: &Shape) -> String {
    let position = shape.position();
    format!(
        "{} {} at ({:.1}, {:.1}) z={}",
        shape.kind(),
        id,
        position.x,
        position.y,
        shape.z_index()
    )
}

/// Descriptions of the shapes under `point`, lowest first
pub fn shapes_at(manager: &ShapeManager, point: Point) -> Vec<String> {
    let found = manager.find_shapes_at_point(point);
    debug!("{} shapes under ({}, {})", found.len(), point.x, point.y);
    found.into_iter().map(|(id, s)| describe(id, s)).collect()
}

/// Descriptions of the shapes picked by a directional box selection
pub fn shapes_in_box(manager: &ShapeManager, selection: &Bounds) -> Vec<String> {
    let mode = if selection.is_left_to_right() {
        "enclosing"
    } else {
        "crossing"
    };
    let found = manager.shapes_like_revit(selection);
    debug!("{} shapes picked by {} selection", found.len(), mode);
    found.into_iter().map(|(id, s)| describe(id, s)).collect()
}
