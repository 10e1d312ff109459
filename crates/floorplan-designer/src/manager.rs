use floorplan_core::{Bounds, CommandError, Point, Result, ShapeId, ShapeLimits};
use serde_json::json;
use tracing::debug;

use crate::commands::{
    AddShape, BringToFront, Command, DesignerCommand, RemoveShapes, UpdateShapeByHandle,
    UpdateShapesPosition,
};
use crate::events::{ShapeEvent, ShapeEventType, SubscriptionId};
use crate::factory::ShapeFactory;
use crate::history::CommandHistory;
use crate::model::ShapeData;
use crate::shape_store::ShapeStore;
use crate::shapes::{DesignerShape, Shape};

/// Whole-shape drag in progress
#[derive(Debug, Clone)]
struct MoveGesture {
    ids: Vec<ShapeId>,
    start: Point,
}

/// Handle drag in progress
#[derive(Debug, Clone)]
struct HandleDrag {
    id: ShapeId,
    index: usize,
}

/// Central authority over one editing session's shapes.
///
/// `ShapeManager` is responsible for:
/// - Owning the live shape collection and its z-order
/// - Running every mutation as a command and recording it for undo/redo
/// - Hit-testing and box selection
/// - Tracking the in-progress move or handle drag of the input layer
///
/// # Gestures
///
/// During a drag the input layer mutates shapes frame by frame against their
/// frozen baseline, without touching history. Releasing the pointer commits
/// the whole gesture as one command, so one undo reverts one gesture.
///
/// # Examples
///
/// ```
/// use floorplan_core::{Point, ShapeLimits};
/// use floorplan_designer::{ShapeData, ShapeManager, WallData};
///
/// let mut manager = ShapeManager::new(ShapeLimits::default());
/// let wall = WallData::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 20.0);
/// let id = manager.add_shape("wall", ShapeData::Wall(wall)).unwrap();
///
/// assert_eq!(manager.find_shapes_at_point(Point::new(50.0, 5.0)).len(), 1);
/// manager.undo().unwrap();
/// assert!(manager.shape(&id).is_none());
/// ```
#[derive(Debug)]
pub struct ShapeManager {
    factory: ShapeFactory,
    store: ShapeStore,
    history: CommandHistory,
    move_gesture: Option<MoveGesture>,
    handle_drag: Option<HandleDrag>,
}

impl ShapeManager {
    /// Creates a manager with the built-in shape types and unbounded history.
    pub fn new(limits: ShapeLimits) -> Self {
        Self::with_history_depth(limits, None)
    }

    /// Creates a manager whose history keeps at most `max_depth` commands.
    ///
    /// # Arguments
    ///
    /// * `limits` - Numeric limits handed to every constructed shape
    /// * `max_depth` - History bound, `None` for unbounded
    pub fn with_history_depth(limits: ShapeLimits, max_depth: Option<usize>) -> Self {
        Self {
            factory: ShapeFactory::new(limits),
            store: ShapeStore::new(),
            history: CommandHistory::with_max_depth(max_depth),
            move_gesture: None,
            handle_drag: None,
        }
    }

    pub fn factory(&self) -> &ShapeFactory {
        &self.factory
    }

    /// Registry access for custom shape types
    pub fn factory_mut(&mut self) -> &mut ShapeFactory {
        &mut self.factory
    }

    pub fn limits(&self) -> &ShapeLimits {
        self.factory.limits()
    }

    /// Attaches a listener for shape lifecycle events.
    pub fn subscribe(&mut self, listener: impl FnMut(&ShapeEvent) + 'static) -> SubscriptionId {
        self.store.observers_mut().subscribe(listener)
    }

    /// Detaches a listener. Returns false if it was not attached.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.observers_mut().unsubscribe(id)
    }

    fn run(&mut self, mut cmd: DesignerCommand) -> Result<()> {
        cmd.execute(&mut self.store)?;
        debug!("Executed '{}'", cmd.name());
        self.history.push(cmd);
        Ok(())
    }

    /// Adds a new shape of type `type_tag`.
    ///
    /// # Arguments
    ///
    /// * `type_tag` - A registered shape type ("wall", "text", ...)
    /// * `data` - Property bag; its id is kept if set, otherwise generated
    ///
    /// # Returns
    ///
    /// The id of the new shape.
    ///
    /// # Errors
    ///
    /// Unknown type, shape construction errors, or an id already in use.
    pub fn add_shape(&mut self, type_tag: &str, data: ShapeData) -> Result<ShapeId> {
        let cmd = AddShape::new(&self.factory, type_tag, data)?;
        let id = cmd.id().clone();
        self.run(cmd.into())?;
        Ok(id)
    }

    /// Removes shapes as one undoable step. An empty `ids` leaves the
    /// history untouched.
    ///
    /// # Errors
    ///
    /// [`CommandError::ShapeNotFound`] if any id is not in the collection;
    /// nothing is removed in that case.
    pub fn remove_shapes(&mut self, ids: &[ShapeId]) -> Result<()> {
        let cmd = RemoveShapes::new(&self.store, ids)?;
        if cmd.is_empty() {
            return Ok(());
        }
        self.run(cmd.into())
    }

    /// Moves handle `handle_index` of shape `id` to `pointer` as one
    /// undoable step.
    pub fn update_shape_by_handle(
        &mut self,
        id: &ShapeId,
        handle_index: usize,
        pointer: Point,
    ) -> Result<()> {
        let cmd = UpdateShapeByHandle::new(&self.store, id, handle_index, pointer)?;
        self.run(cmd.into())
    }

    /// Commits the current state of `ids` as the result of a drag.
    ///
    /// Undo restores each shape's baseline from before the drag. Missing ids
    /// are skipped; nothing is recorded when none are left.
    pub fn update_shapes_position(&mut self, ids: &[ShapeId]) -> Result<()> {
        let cmd = UpdateShapesPosition::new(&self.store, ids);
        if cmd.is_empty() {
            return Ok(());
        }
        self.run(cmd.into())
    }

    /// Raises `ids` above every other shape, later ids ending up higher.
    /// An empty `ids` is a no-op.
    pub fn bring_shapes_to_front(&mut self, ids: &[ShapeId]) -> Result<()> {
        let cmd = BringToFront::new(&self.store, ids)?;
        if cmd.is_empty() {
            return Ok(());
        }
        self.run(cmd.into())
    }

    pub fn bring_shape_to_front(&mut self, id: &ShapeId) -> Result<()> {
        self.bring_shapes_to_front(std::slice::from_ref(id))
    }

    /// Reverts the last command.
    ///
    /// # Returns
    ///
    /// `false` when the history is empty.
    pub fn undo(&mut self) -> Result<bool> {
        self.history.undo(&mut self.store)
    }

    /// Re-applies the last undone command.
    ///
    /// # Returns
    ///
    /// `false` at the tip of the history.
    pub fn redo(&mut self) -> Result<bool> {
        self.history.redo(&mut self.store)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Drops every shape and the whole history.
    pub fn clear(&mut self) {
        self.move_gesture = None;
        self.handle_drag = None;
        self.store.clear();
        self.history.clear();
    }

    pub fn shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.store.get(id)
    }

    /// Live access for in-gesture edits; changes made here are not recorded
    /// until committed through a command.
    pub fn shape_mut(&mut self, id: &ShapeId) -> Option<&mut Shape> {
        self.store.get_mut(id)
    }

    /// All shapes in ascending z-order.
    pub fn shapes(&self) -> Vec<(&ShapeId, &Shape)> {
        self.store.ordered()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub(crate) fn store_mut(&mut self) -> &mut ShapeStore {
        &mut self.store
    }

    /// Shapes containing `point`, in ascending z-order.
    pub fn find_shapes_at_point(&self, point: Point) -> Vec<(&ShapeId, &Shape)> {
        self.store
            .ordered()
            .into_iter()
            .filter(|(_, shape)| shape.is_point_inside(point))
            .collect()
    }

    /// Box selection following the CAD convention.
    ///
    /// A box dragged left to right (`start.x < end.x`) picks shapes fully
    /// inside it; any other box picks shapes that touch it. Shapes without
    /// bounds are never picked.
    ///
    /// # Arguments
    ///
    /// * `selection` - The box as dragged, not normalized
    pub fn shapes_like_revit(&self, selection: &Bounds) -> Vec<(&ShapeId, &Shape)> {
        let enclosing = selection.is_left_to_right();
        self.store
            .ordered()
            .into_iter()
            .filter(|(_, shape)| match shape.bounds() {
                Some(b) if enclosing => selection.contains(&b),
                Some(b) => selection.intersects(&b),
                None => false,
            })
            .collect()
    }

    /// Makes `ids` the selection: they are flagged selected and every other
    /// selected shape is deselected.
    pub fn select_shapes(&mut self, ids: &[ShapeId]) {
        for id in self.store.ordered_ids() {
            let wanted = ids.contains(&id);
            let Some(shape) = self.store.get_mut(&id) else {
                continue;
            };
            if shape.is_selected() == wanted {
                continue;
            }
            shape.set_selected(wanted);
            let kind = if wanted {
                ShapeEventType::Selected
            } else {
                ShapeEventType::Deselected
            };
            self.store.emit(kind, &id, None);
        }
    }

    pub fn deselect_all(&mut self) {
        self.select_shapes(&[]);
    }

    /// Ids of selected shapes in ascending z-order
    pub fn selected_ids(&self) -> Vec<ShapeId> {
        self.store
            .ordered()
            .into_iter()
            .filter(|(_, s)| s.is_selected())
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Sets the hover flag. Returns false if the shape does not exist.
    pub fn set_hovered(&mut self, id: &ShapeId, hovered: bool) -> bool {
        let Some(shape) = self.store.get_mut(id) else {
            return false;
        };
        if shape.is_hovered() != hovered {
            shape.set_hovered(hovered);
            self.store
                .emit(ShapeEventType::Updated, id, Some(json!({ "hovered": hovered })));
        }
        true
    }

    /// Starts dragging `ids` from `start`, freezing each shape's baseline.
    pub fn begin_move(&mut self, ids: &[ShapeId], start: Point) {
        let ids: Vec<ShapeId> = ids.iter().filter(|id| self.store.contains(id)).cloned().collect();
        for id in &ids {
            if let Some(shape) = self.store.get_mut(id) {
                shape.capture_state();
            }
        }
        self.move_gesture = Some(MoveGesture { ids, start });
    }

    /// Translates the dragged shapes by `current - start`. No-op without an
    /// active move.
    pub fn drag_move(&mut self, current: Point) {
        let Some(gesture) = &self.move_gesture else {
            return;
        };
        for id in &gesture.ids {
            if let Some(shape) = self.store.get_mut(id) {
                shape.move_to(gesture.start, current);
            }
        }
    }

    /// Finishes the move at `current` and commits it.
    ///
    /// # Returns
    ///
    /// `false` when no move was active or it carried no shapes.
    pub fn end_move(&mut self, current: Point) -> Result<bool> {
        self.drag_move(current);
        let Some(gesture) = self.move_gesture.take() else {
            return Ok(false);
        };
        if gesture.ids.is_empty() {
            return Ok(false);
        }
        self.update_shapes_position(&gesture.ids)?;
        Ok(true)
    }

    /// Starts dragging the handle of shape `id` under `point`.
    ///
    /// # Returns
    ///
    /// The grabbed handle index, or `None` when no handle is under `point`.
    ///
    /// # Errors
    ///
    /// [`CommandError::DragInProgress`] while another handle drag is active,
    /// [`CommandError::ShapeNotFound`] for an unknown id.
    pub fn begin_handle_drag(&mut self, id: &ShapeId, point: Point) -> Result<Option<usize>> {
        if let Some(drag) = &self.handle_drag {
            return Err(CommandError::DragInProgress {
                id: drag.id.clone(),
            }
            .into());
        }
        let shape = self
            .store
            .get_mut(id)
            .ok_or_else(|| CommandError::ShapeNotFound { id: id.clone() })?;
        let Some(index) = shape.handle_at_point(point) else {
            return Ok(None);
        };
        shape.capture_state();
        self.handle_drag = Some(HandleDrag {
            id: id.clone(),
            index,
        });
        Ok(Some(index))
    }

    /// Moves the grabbed handle to `pointer`. No-op without an active drag.
    pub fn drag_handle(&mut self, pointer: Point) -> Result<()> {
        let Some(drag) = &self.handle_drag else {
            return Ok(());
        };
        if let Some(shape) = self.store.get_mut(&drag.id) {
            shape.update_handle(drag.index, pointer)?;
        }
        Ok(())
    }

    /// Finishes the handle drag at `pointer` and commits it.
    ///
    /// The shape is first put back to its pre-drag baseline so the command
    /// records the original handle position as its undo target.
    ///
    /// # Returns
    ///
    /// `false` when no handle drag was active.
    pub fn end_handle_drag(&mut self, pointer: Point) -> Result<bool> {
        let Some(drag) = self.handle_drag.take() else {
            return Ok(false);
        };
        let Some(shape) = self.store.get_mut(&drag.id) else {
            return Ok(false);
        };
        let baseline = shape.old_data();
        shape.restore_state(baseline)?;
        self.update_shape_by_handle(&drag.id, drag.index, pointer)?;
        Ok(true)
    }

    /// Abandons the handle drag, restoring the pre-drag geometry.
    pub fn cancel_handle_drag(&mut self) -> Result<()> {
        let Some(drag) = self.handle_drag.take() else {
            return Ok(());
        };
        if let Some(shape) = self.store.get_mut(&drag.id) {
            let baseline = shape.old_data();
            shape.restore_state(baseline)?;
        }
        Ok(())
    }

    pub fn is_dragging_handle(&self) -> bool {
        self.handle_drag.is_some()
    }

    pub fn is_moving(&self) -> bool {
        self.move_gesture.is_some()
    }
}
