//! Internal setters for the edit state
//!
//! These methods are called by undo operations and the public operations to
//! modify state. They never create undo entries on their own.

use crate::undo_operation::{PovOperationType, PovUndoOp};
use crate::{BitGrid, Result};

use super::EditState;

impl EditState {
    /// Replace the committed grid (internal, no undo)
    pub(crate) fn set_grid_internal(&mut self, grid: BitGrid) {
        self.grid = grid;
    }

    /// Push an undo operation and execute it (redo)
    pub(crate) fn push_undo_action(&mut self, op: PovUndoOp) {
        op.redo(self);
        self.push_plain_undo(op);
    }

    /// Push an undo operation without executing it
    pub(crate) fn push_plain_undo(&mut self, op: PovUndoOp) {
        if op.changes_data() {
            self.is_dirty = true;
        }
        self.undo_stack.push(op);
    }

    /// Run `edit` on a copy of the committed grid and commit the copy as one
    /// undo step.
    ///
    /// If `edit` fails the committed grid is left untouched. An edit that
    /// changes nothing is not recorded.
    pub(crate) fn edit_grid<F>(&mut self, description: &str, operation_type: PovOperationType, edit: F) -> Result<bool>
    where
        F: FnOnce(&mut BitGrid) -> Result<()>,
    {
        self.cancel_gesture();

        let mut new_data = self.grid.clone();
        edit(&mut new_data)?;
        Ok(self.commit_grid(description, operation_type, new_data))
    }

    /// Make `new_data` the committed grid as one undo step.
    /// Returns false (and records nothing) if it equals the current grid.
    pub(crate) fn commit_grid(&mut self, description: &str, operation_type: PovOperationType, new_data: BitGrid) -> bool {
        if new_data == self.grid {
            return false;
        }
        let op = PovUndoOp::EditGrid {
            description: description.to_string(),
            operation_type,
            old_data: self.grid.clone(),
            new_data,
        };
        self.push_undo_action(op);
        true
    }
}
