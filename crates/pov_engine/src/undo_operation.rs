//! Undo operations for grid editing
//!
//! Every committed change stores the complete grid before and after. A
//! 16 × 64 grid is small enough that snapshots are simpler than diffs.

use serde::{Deserialize, Serialize};

use crate::edit_state::EditState;
use crate::BitGrid;

/// Type of operation for grouping related undos
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PovOperationType {
    /// Pen strokes and shapes
    EditPixels,
    /// Named patterns and letters
    Pattern,
    /// Width change (full rebuild)
    Resize,
}

/// Serializable undo operation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PovUndoOp {
    /// Replace the grid contents
    EditGrid {
        description: String,
        operation_type: PovOperationType,
        old_data: BitGrid,
        new_data: BitGrid,
    },

    /// Rebuild the grid with a new width
    Resize { old_data: BitGrid, new_data: BitGrid },
}

impl PovUndoOp {
    /// Get a description of this operation for display
    pub fn get_description(&self) -> String {
        match self {
            PovUndoOp::EditGrid { description, .. } => description.clone(),
            PovUndoOp::Resize { old_data, new_data } => format!("Resize {} -> {}", old_data.width(), new_data.width()),
        }
    }

    pub fn get_operation_type(&self) -> PovOperationType {
        match self {
            PovUndoOp::EditGrid { operation_type, .. } => *operation_type,
            PovUndoOp::Resize { .. } => PovOperationType::Resize,
        }
    }

    /// Whether this operation changes data (affects dirty flag)
    pub fn changes_data(&self) -> bool {
        match self {
            PovUndoOp::EditGrid { old_data, new_data, .. } | PovUndoOp::Resize { old_data, new_data } => old_data != new_data,
        }
    }

    /// Undo this operation
    pub fn undo(&self, state: &mut EditState) {
        match self {
            PovUndoOp::EditGrid { old_data, .. } | PovUndoOp::Resize { old_data, .. } => {
                state.set_grid_internal(old_data.clone());
            }
        }
    }

    /// Redo this operation
    pub fn redo(&self, state: &mut EditState) {
        match self {
            PovUndoOp::EditGrid { new_data, .. } | PovUndoOp::Resize { new_data, .. } => {
                state.set_grid_internal(new_data.clone());
            }
        }
    }
}
