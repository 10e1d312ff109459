//! Live shape collection.
//!
//! The store is the only place shapes are inserted, removed or mutated on
//! behalf of a command. Every such change is announced to the observers.

use std::collections::HashMap;

use floorplan_core::{CommandError, Point, Result, ShapeId};
use tracing::{debug, warn};

use crate::events::{ShapeEvent, ShapeEventType, ShapeObservers};
use crate::shapes::{DesignerShape, Shape};

/// A shape plus its insertion rank, which breaks z-index ties.
#[derive(Debug, Clone)]
pub struct StoredShape {
    pub shape: Shape,
    order: u64,
}

#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: HashMap<ShapeId, StoredShape>,
    next_order: u64,
    observers: ShapeObservers,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn contains(&self, id: &ShapeId) -> bool {
        self.shapes.contains_key(id)
    }

    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id).map(|s| &s.shape)
    }

    /// The shape together with its stacking rank
    pub fn get_stored(&self, id: &ShapeId) -> Option<&StoredShape> {
        self.shapes.get(id)
    }

    /// Direct mutable access, no notification
    pub fn get_mut(&mut self, id: &ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(id).map(|s| &mut s.shape)
    }

    /// Shapes in ascending z-order; equal z-indices keep insertion order
    pub fn ordered(&self) -> Vec<(&ShapeId, &Shape)> {
        let mut entries: Vec<(&ShapeId, &StoredShape)> = self.shapes.iter().collect();
        entries.sort_by_key(|(_, s)| (s.shape.z_index(), s.order));
        entries.into_iter().map(|(id, s)| (id, &s.shape)).collect()
    }

    /// Ids in ascending z-order
    pub fn ordered_ids(&self) -> Vec<ShapeId> {
        self.ordered().into_iter().map(|(id, _)| id.clone()).collect()
    }

    pub fn max_z_index(&self) -> Option<i64> {
        self.shapes.values().map(|s| s.shape.z_index()).max()
    }

    pub fn observers(&self) -> &ShapeObservers {
        &self.observers
    }

    pub fn observers_mut(&mut self) -> &mut ShapeObservers {
        &mut self.observers
    }

    /// Announces the current state of shape `id`; silent when it is absent
    pub fn emit(&mut self, kind: ShapeEventType, id: &ShapeId, payload: Option<serde_json::Value>) {
        let Some(stored) = self.shapes.get(id) else {
            return;
        };
        let mut event = ShapeEvent::new(kind, id.clone(), stored.shape.data());
        event.payload = payload;
        self.observers.notify(&event);
    }

    /// Inserts a new shape on top of its z-index band.
    ///
    /// # Errors
    /// [`CommandError::ShapeExists`] when `id` is already taken.
    pub fn add_directly(&mut self, id: ShapeId, shape: Shape) -> Result<()> {
        if self.shapes.contains_key(&id) {
            return Err(CommandError::ShapeExists { id }.into());
        }
        let order = self.next_order;
        self.next_order += 1;
        self.restore_directly(id, StoredShape { shape, order });
        Ok(())
    }

    /// Puts back a previously removed shape with its original stacking rank
    pub fn restore_directly(&mut self, id: ShapeId, stored: StoredShape) {
        debug!("Inserting shape {} ({})", id, stored.shape.kind());
        self.next_order = self.next_order.max(stored.order + 1);
        self.shapes.insert(id.clone(), stored);
        self.emit(ShapeEventType::Added, &id, None);
    }

    pub fn remove_directly(&mut self, id: &ShapeId) -> Option<StoredShape> {
        let stored = self.shapes.remove(id)?;
        debug!("Removed shape {}", id);
        let event = ShapeEvent::new(ShapeEventType::Removed, id.clone(), stored.shape.data());
        self.observers.notify(&event);
        Some(stored)
    }

    /// Runs `f` on shape `id` and announces the result as an update.
    ///
    /// Returns `Ok(false)` when the shape is not in the collection.
    pub fn update_directly<F>(&mut self, id: &ShapeId, f: F) -> Result<bool>
    where
        F: FnOnce(&mut Shape) -> Result<()>,
    {
        let Some(stored) = self.shapes.get_mut(id) else {
            warn!("Skipping update of missing shape {}", id);
            return Ok(false);
        };
        f(&mut stored.shape)?;
        self.emit(ShapeEventType::Updated, id, None);
        Ok(true)
    }

    /// Moves one handle as a single committed step: the current geometry
    /// becomes the baseline, the handle moves, and the result becomes the new
    /// baseline.
    ///
    /// # Errors
    /// [`CommandError::ShapeNotFound`] or the shape's handle error.
    pub fn update_by_handle_directly(
        &mut self,
        id: &ShapeId,
        index: usize,
        pointer: Point,
    ) -> Result<()> {
        if !self.contains(id) {
            return Err(CommandError::ShapeNotFound { id: id.clone() }.into());
        }
        self.update_directly(id, |shape| {
            shape.capture_state();
            shape.update_handle(index, pointer)?;
            shape.capture_state();
            Ok(())
        })?;
        Ok(())
    }

    /// Removes every shape, announcing each removal
    pub fn clear(&mut self) {
        for id in self.ordered_ids() {
            self.remove_directly(&id);
        }
        self.next_order = 0;
    }
}
