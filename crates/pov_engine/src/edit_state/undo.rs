//! Undo/Redo system
//!
//! Undo and redo cancel a running gesture before touching the history.

use crate::undo_stack::PovUndoState;
use crate::Result;

use super::EditState;

impl PovUndoState for EditState {
    fn undo_description(&self) -> Option<String> {
        self.undo_stack.undo_description()
    }

    fn can_undo(&self) -> bool {
        self.undo_stack.can_undo()
    }

    fn undo(&mut self) -> Result<()> {
        self.cancel_gesture();
        let Some(op) = self.undo_stack.pop_undo() else {
            return Ok(());
        };

        if op.changes_data() {
            self.is_dirty = true;
        }

        log::debug!("undo {:?}: {}", op.get_operation_type(), op.get_description());
        op.undo(self);
        self.undo_stack.push_redo(op);
        Ok(())
    }

    fn redo_description(&self) -> Option<String> {
        self.undo_stack.redo_description()
    }

    fn can_redo(&self) -> bool {
        self.undo_stack.can_redo()
    }

    fn redo(&mut self) -> Result<()> {
        self.cancel_gesture();
        let Some(op) = self.undo_stack.pop_redo() else {
            return Ok(());
        };

        if op.changes_data() {
            self.is_dirty = true;
        }

        log::debug!("redo {:?}: {}", op.get_operation_type(), op.get_description());
        op.redo(self);
        self.undo_stack.push_undone(op);
        Ok(())
    }
}
