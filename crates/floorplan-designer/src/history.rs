//! Linear undo/redo history.

use floorplan_core::Result;
use tracing::debug;

use crate::commands::{Command, DesignerCommand};
use crate::shape_store::ShapeStore;

/// Executed commands on the undo stack, undone ones on the redo stack.
///
/// Recording a new command drops the redo stack: there is no branching.
#[derive(Debug, Default)]
pub struct CommandHistory {
    undo_stack: Vec<DesignerCommand>,
    redo_stack: Vec<DesignerCommand>,
    max_depth: Option<usize>,
}

impl CommandHistory {
    /// Unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// History that forgets its oldest entries beyond `max_depth`
    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Records an already executed command
    pub fn push(&mut self, cmd: DesignerCommand) {
        self.redo_stack.clear();
        self.undo_stack.push(cmd);
        if let Some(max) = self.max_depth {
            if self.undo_stack.len() > max {
                let excess = self.undo_stack.len() - max;
                self.undo_stack.drain(..excess);
            }
        }
    }

    /// Reverts the most recent command. Returns `Ok(false)` when there is
    /// nothing to undo.
    pub fn undo(&mut self, store: &mut ShapeStore) -> Result<bool> {
        let Some(mut cmd) = self.undo_stack.pop() else {
            return Ok(false);
        };
        if let Err(e) = cmd.undo(store) {
            self.undo_stack.push(cmd);
            return Err(e);
        }
        debug!("Undid '{}'", cmd.name());
        self.redo_stack.push(cmd);
        Ok(true)
    }

    /// Re-applies the most recently undone command. Returns `Ok(false)` at
    /// the tip of the history.
    pub fn redo(&mut self, store: &mut ShapeStore) -> Result<bool> {
        let Some(mut cmd) = self.redo_stack.pop() else {
            return Ok(false);
        };
        if let Err(e) = cmd.execute(store) {
            self.redo_stack.push(cmd);
            return Err(e);
        }
        debug!("Redid '{}'", cmd.name());
        self.undo_stack.push(cmd);
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Name of the command the next undo would revert
    pub fn undo_name(&self) -> Option<&str> {
        self.undo_stack.last().map(|c| c.name())
    }

    pub fn redo_name(&self) -> Option<&str> {
        self.redo_stack.last().map(|c| c.name())
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
