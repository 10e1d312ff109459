//! Undoable mutations of the shape collection.
//!
//! Each command captures the state it needs to undo at construction time,
//! so a constructed command can always be reversed once executed. Commands
//! change shapes only through the [`ShapeStore`] direct helpers.

use floorplan_core::{CommandError, Point, Result, ShapeId};
use serde_json::json;
use tracing::warn;

use crate::events::ShapeEventType;
use crate::factory::ShapeFactory;
use crate::model::{ShapeData, ShapeMetadata};
use crate::shape_store::{ShapeStore, StoredShape};
use crate::shapes::{DesignerShape, Shape};

/// A reversible mutation of the shape collection.
pub trait Command {
    /// Applies the command. Called once for the initial run and again on redo.
    fn execute(&mut self, store: &mut ShapeStore) -> Result<()>;

    /// Reverts the command.
    fn undo(&mut self, store: &mut ShapeStore) -> Result<()>;

    /// Returns the name of the command for display.
    fn name(&self) -> &str;
}

fn dedup(ids: &[ShapeId]) -> Vec<ShapeId> {
    let mut out: Vec<ShapeId> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(id) {
            out.push(id.clone());
        }
    }
    out
}

/// Inserts one new shape.
#[derive(Debug, Clone)]
pub struct AddShape {
    id: ShapeId,
    fresh: Option<Shape>,
    removed: Option<StoredShape>,
}

impl AddShape {
    /// Builds the shape through `factory`. The id is taken from `data` or
    /// generated, and fixed from here on.
    ///
    /// # Errors
    /// Factory errors (unknown type) and shape construction errors.
    pub fn new(factory: &ShapeFactory, type_tag: &str, mut data: ShapeData) -> Result<Self> {
        let common = data.common_mut();
        let id = common.id.get_or_insert_with(ShapeId::generate).clone();
        if common.metadata.is_none() {
            common.metadata = Some(ShapeMetadata::created_now());
        }
        let shape = factory.create(type_tag, data)?;
        Ok(Self {
            id,
            fresh: Some(shape),
            removed: None,
        })
    }

    pub fn id(&self) -> &ShapeId {
        &self.id
    }
}

impl Command for AddShape {
    fn execute(&mut self, store: &mut ShapeStore) -> Result<()> {
        if let Some(stored) = self.removed.take() {
            store.restore_directly(self.id.clone(), stored);
        } else if let Some(shape) = self.fresh.take() {
            if let Err(e) = store.add_directly(self.id.clone(), shape.clone()) {
                self.fresh = Some(shape);
                return Err(e);
            }
        }
        Ok(())
    }

    fn undo(&mut self, store: &mut ShapeStore) -> Result<()> {
        self.removed = store.remove_directly(&self.id);
        Ok(())
    }

    fn name(&self) -> &str {
        "Add Shape"
    }
}

/// Removes a set of shapes, keeping everything needed to put them back
/// exactly, stacking included.
#[derive(Debug, Clone)]
pub struct RemoveShapes {
    targets: Vec<(ShapeId, StoredShape)>,
}

impl RemoveShapes {
    /// Snapshots every target, kind and property bag included.
    ///
    /// # Errors
    /// [`CommandError::ShapeNotFound`] if any id is not a live shape.
    pub fn new(store: &ShapeStore, ids: &[ShapeId]) -> Result<Self> {
        let targets = dedup(ids)
            .into_iter()
            .map(|id| match store.get_stored(&id) {
                Some(stored) => Ok((id, stored.clone())),
                None => Err(CommandError::ShapeNotFound { id }.into()),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { targets })
    }

    pub fn ids(&self) -> impl Iterator<Item = &ShapeId> {
        self.targets.iter().map(|(id, _)| id)
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl Command for RemoveShapes {
    fn execute(&mut self, store: &mut ShapeStore) -> Result<()> {
        for (id, _) in &self.targets {
            store.remove_directly(id);
        }
        Ok(())
    }

    fn undo(&mut self, store: &mut ShapeStore) -> Result<()> {
        for (id, stored) in &self.targets {
            store.restore_directly(id.clone(), stored.clone());
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "Remove Shapes"
    }
}

/// Moves one handle of one shape. Undo moves the handle back to where it was
/// when the command was built.
#[derive(Debug, Clone)]
pub struct UpdateShapeByHandle {
    id: ShapeId,
    handle_index: usize,
    old_position: Point,
    new_position: Point,
}

impl UpdateShapeByHandle {
    /// # Errors
    /// [`CommandError::ShapeNotFound`] for a missing shape, or
    /// `ShapeError::InvalidHandleIndex` for a handle the shape does not have.
    pub fn new(store: &ShapeStore, id: &ShapeId, handle_index: usize, pointer: Point) -> Result<Self> {
        let shape = store
            .get(id)
            .ok_or_else(|| CommandError::ShapeNotFound { id: id.clone() })?;
        let old_position = shape.handle_position(handle_index)?;
        Ok(Self {
            id: id.clone(),
            handle_index,
            old_position,
            new_position: pointer,
        })
    }

    pub fn old_position(&self) -> Point {
        self.old_position
    }
}

impl Command for UpdateShapeByHandle {
    fn execute(&mut self, store: &mut ShapeStore) -> Result<()> {
        store.update_by_handle_directly(&self.id, self.handle_index, self.new_position)
    }

    fn undo(&mut self, store: &mut ShapeStore) -> Result<()> {
        store.update_by_handle_directly(&self.id, self.handle_index, self.old_position)
    }

    fn name(&self) -> &str {
        "Update Shape By Handle"
    }
}

/// Commits a finished whole-shape drag.
///
/// The pre-drag bags are read from each shape's baseline at construction.
/// The first execute freezes the live state as the new baseline and records
/// it, so redo can re-apply exactly that state.
#[derive(Debug, Clone)]
pub struct UpdateShapesPosition {
    before: Vec<(ShapeId, ShapeData)>,
    after: Option<Vec<(ShapeId, ShapeData)>>,
}

impl UpdateShapesPosition {
    /// Ids that are not in the collection are skipped.
    pub fn new(store: &ShapeStore, ids: &[ShapeId]) -> Self {
        let before = dedup(ids)
            .into_iter()
            .filter_map(|id| match store.get(&id) {
                Some(shape) => Some((id, shape.old_data())),
                None => {
                    warn!("Position commit skips missing shape {}", id);
                    None
                }
            })
            .collect();
        Self {
            before,
            after: None,
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = &ShapeId> {
        self.before.iter().map(|(id, _)| id)
    }

    /// True when no requested shape was found
    pub fn is_empty(&self) -> bool {
        self.before.is_empty()
    }
}

fn restore_and_capture(store: &mut ShapeStore, id: &ShapeId, data: &ShapeData) -> Result<()> {
    store.update_directly(id, |shape| {
        shape.restore_state(data.clone())?;
        shape.capture_state();
        Ok(())
    })?;
    Ok(())
}

impl Command for UpdateShapesPosition {
    fn execute(&mut self, store: &mut ShapeStore) -> Result<()> {
        match &self.after {
            Some(after) => {
                for (id, data) in after {
                    restore_and_capture(store, id, data)?;
                }
            }
            None => {
                let mut after = Vec::with_capacity(self.before.len());
                for (id, _) in &self.before {
                    let mut committed = None;
                    store.update_directly(id, |shape| {
                        committed = Some(shape.data());
                        shape.capture_state();
                        Ok(())
                    })?;
                    if let Some(data) = committed {
                        after.push((id.clone(), data));
                    }
                }
                self.after = Some(after);
            }
        }
        Ok(())
    }

    fn undo(&mut self, store: &mut ShapeStore) -> Result<()> {
        for (id, data) in &self.before {
            restore_and_capture(store, id, data)?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "Move Shapes"
    }
}

/// Raises shapes above everything else, in argument order.
#[derive(Debug, Clone)]
pub struct BringToFront {
    previous: Vec<(ShapeId, i64)>,
    assigned: Vec<(ShapeId, i64)>,
}

impl BringToFront {
    /// Assigns `max_z + 1`, `max_z + 2`, ... to `ids` in order.
    ///
    /// # Errors
    /// [`CommandError::ShapeNotFound`] if any id is not a live shape.
    pub fn new(store: &ShapeStore, ids: &[ShapeId]) -> Result<Self> {
        let ids = dedup(ids);
        let mut previous = Vec::with_capacity(ids.len());
        for id in &ids {
            let shape = store
                .get(id)
                .ok_or_else(|| CommandError::ShapeNotFound { id: id.clone() })?;
            previous.push((id.clone(), shape.z_index()));
        }
        let top = store.max_z_index().unwrap_or(0);
        let assigned = ids
            .into_iter()
            .zip(1..)
            .map(|(id, step)| (id, top + step))
            .collect();
        Ok(Self { previous, assigned })
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    fn apply(store: &mut ShapeStore, z_indices: &[(ShapeId, i64)]) {
        for (id, z) in z_indices {
            if let Some(shape) = store.get_mut(id) {
                shape.set_z_index(*z);
                store.emit(ShapeEventType::Updated, id, Some(json!({ "zIndex": z })));
            }
        }
    }
}

impl Command for BringToFront {
    fn execute(&mut self, store: &mut ShapeStore) -> Result<()> {
        Self::apply(store, &self.assigned);
        Ok(())
    }

    fn undo(&mut self, store: &mut ShapeStore) -> Result<()> {
        Self::apply(store, &self.previous);
        Ok(())
    }

    fn name(&self) -> &str {
        "Bring To Front"
    }
}

/// Any command the manager records in its history.
#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum DesignerCommand {
    AddShape(AddShape),
    RemoveShapes(RemoveShapes),
    UpdateShapeByHandle(UpdateShapeByHandle),
    UpdateShapesPosition(UpdateShapesPosition),
    BringToFront(BringToFront),
}

impl Command for DesignerCommand {
    fn execute(&mut self, store: &mut ShapeStore) -> Result<()> {
        match self {
            DesignerCommand::AddShape(cmd) => cmd.execute(store),
            DesignerCommand::RemoveShapes(cmd) => cmd.execute(store),
            DesignerCommand::UpdateShapeByHandle(cmd) => cmd.execute(store),
            DesignerCommand::UpdateShapesPosition(cmd) => cmd.execute(store),
            DesignerCommand::BringToFront(cmd) => cmd.execute(store),
        }
    }

    fn undo(&mut self, store: &mut ShapeStore) -> Result<()> {
        match self {
            DesignerCommand::AddShape(cmd) => cmd.undo(store),
            DesignerCommand::RemoveShapes(cmd) => cmd.undo(store),
            DesignerCommand::UpdateShapeByHandle(cmd) => cmd.undo(store),
            DesignerCommand::UpdateShapesPosition(cmd) => cmd.undo(store),
            DesignerCommand::BringToFront(cmd) => cmd.undo(store),
        }
    }

    fn name(&self) -> &str {
        match self {
            DesignerCommand::AddShape(cmd) => cmd.name(),
            DesignerCommand::RemoveShapes(cmd) => cmd.name(),
            DesignerCommand::UpdateShapeByHandle(cmd) => cmd.name(),
            DesignerCommand::UpdateShapesPosition(cmd) => cmd.name(),
            DesignerCommand::BringToFront(cmd) => cmd.name(),
        }
    }
}

impl From<AddShape> for DesignerCommand {
    fn from(cmd: AddShape) -> Self {
        DesignerCommand::AddShape(cmd)
    }
}

impl From<RemoveShapes> for DesignerCommand {
    fn from(cmd: RemoveShapes) -> Self {
        DesignerCommand::RemoveShapes(cmd)
    }
}

impl From<UpdateShapeByHandle> for DesignerCommand {
    fn from(cmd: UpdateShapeByHandle) -> Self {
        DesignerCommand::UpdateShapeByHandle(cmd)
    }
}

impl From<UpdateShapesPosition> for DesignerCommand {
    fn from(cmd: UpdateShapesPosition) -> Self {
        DesignerCommand::UpdateShapesPosition(cmd)
    }
}

impl From<BringToFront> for DesignerCommand {
    fn from(cmd: BringToFront) -> Self {
        DesignerCommand::BringToFront(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WallData;
    use floorplan_core::{Error, ShapeLimits};

    fn wall_data() -> ShapeData {
        ShapeData::Wall(WallData::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 10.0))
    }

    #[test]
    fn test_add_assigns_id_at_construction() {
        let factory = ShapeFactory::new(ShapeLimits::default());
        let mut store = ShapeStore::new();
        let mut cmd = AddShape::new(&factory, "wall", wall_data()).unwrap();
        let id = cmd.id().clone();
        assert!(!store.contains(&id));

        cmd.execute(&mut store).unwrap();
        assert_eq!(store.get(&id).unwrap().id(), Some(&id));
        cmd.undo(&mut store).unwrap();
        assert!(store.is_empty());
        cmd.execute(&mut store).unwrap();
        assert!(store.contains(&id));
    }

    #[test]
    fn test_remove_unknown_id_fails_at_construction() {
        let store = ShapeStore::new();
        let err = RemoveShapes::new(&store, &[ShapeId::from("ghost")]).unwrap_err();
        assert!(matches!(
            err,
            Error::Command(CommandError::ShapeNotFound { .. })
        ));
    }

    #[test]
    fn test_remove_snapshots_targets_at_construction() {
        let factory = ShapeFactory::new(ShapeLimits::default());
        let mut store = ShapeStore::new();
        let mut add = AddShape::new(&factory, "wall", wall_data()).unwrap();
        add.execute(&mut store).unwrap();
        let id = add.id().clone();
        let before = store.get(&id).unwrap().data();

        let mut cmd = RemoveShapes::new(&store, &[id.clone(), id.clone()]).unwrap();
        assert_eq!(cmd.ids().count(), 1);

        // Edits made after construction are not part of the snapshot
        store
            .get_mut(&id)
            .unwrap()
            .move_to(Point::new(0.0, 0.0), Point::new(30.0, 30.0));
        cmd.execute(&mut store).unwrap();
        assert!(store.is_empty());

        cmd.undo(&mut store).unwrap();
        assert_eq!(store.get(&id).unwrap().data(), before);
        cmd.execute(&mut store).unwrap();
        assert!(!store.contains(&id));
    }

    #[test]
    fn test_handle_command_snapshots_current_handle() {
        let factory = ShapeFactory::new(ShapeLimits::default());
        let mut store = ShapeStore::new();
        let mut add = AddShape::new(&factory, "wall", wall_data()).unwrap();
        add.execute(&mut store).unwrap();
        let id = add.id().clone();

        let mut cmd = UpdateShapeByHandle::new(&store, &id, 1, Point::new(80.0, 40.0)).unwrap();
        assert_eq!(cmd.old_position(), Point::new(100.0, 0.0));
        cmd.execute(&mut store).unwrap();
        assert_eq!(store.get(&id).unwrap().handles()[1], Point::new(80.0, 40.0));
        cmd.undo(&mut store).unwrap();
        assert_eq!(store.get(&id).unwrap().handles()[1], Point::new(100.0, 0.0));

        assert!(UpdateShapeByHandle::new(&store, &id, 2, Point::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn test_bring_to_front_orders_by_argument() {
        let factory = ShapeFactory::new(ShapeLimits::default());
        let mut store = ShapeStore::new();
        let mut ids = Vec::new();
        for _ in 0..3 {
            let mut add = AddShape::new(&factory, "wall", wall_data()).unwrap();
            add.execute(&mut store).unwrap();
            ids.push(add.id().clone());
        }

        let mut cmd = BringToFront::new(&store, &[ids[1].clone(), ids[0].clone()]).unwrap();
        cmd.execute(&mut store).unwrap();
        assert_eq!(store.ordered_ids(), vec![ids[2].clone(), ids[1].clone(), ids[0].clone()]);
        assert_eq!(store.get(&ids[0]).unwrap().z_index(), 2);

        cmd.undo(&mut store).unwrap();
        assert_eq!(store.ordered_ids(), ids);
    }
}
