//! Undo stack for grid editing

use crate::Result;

use crate::undo_operation::PovUndoOp;

/// Trait for types that support undo/redo operations
pub trait PovUndoState {
    /// Get description of the next undo operation
    fn undo_description(&self) -> Option<String>;

    /// Check if undo is available
    fn can_undo(&self) -> bool;

    /// Perform undo operation
    fn undo(&mut self) -> Result<()>;

    /// Get description of the next redo operation
    fn redo_description(&self) -> Option<String>;

    /// Check if redo is available
    fn can_redo(&self) -> bool;

    /// Perform redo operation
    fn redo(&mut self) -> Result<()>;
}

/// Number of undo steps kept unless configured otherwise
pub const DEFAULT_UNDO_LIMIT: usize = 256;

/// Undo and redo history. At most `limit` undo steps are kept; pushing past
/// the limit forgets the oldest ones.
#[derive(Debug)]
pub struct PovUndoStack {
    undo_stack: Vec<PovUndoOp>,
    redo_stack: Vec<PovUndoOp>,
    limit: usize,
}

impl Default for PovUndoStack {
    fn default() -> Self {
        Self::with_limit(DEFAULT_UNDO_LIMIT)
    }
}

impl PovUndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Change the depth limit, dropping the oldest steps if needed
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        self.trim();
    }

    /// Push a new operation. Any redo history is discarded.
    pub fn push(&mut self, op: PovUndoOp) {
        self.undo_stack.push(op);
        self.redo_stack.clear();
        self.trim();
    }

    fn trim(&mut self) {
        if self.undo_stack.len() > self.limit {
            let excess = self.undo_stack.len() - self.limit;
            self.undo_stack.drain(..excess);
        }
    }

    pub fn pop_undo(&mut self) -> Option<PovUndoOp> {
        self.undo_stack.pop()
    }

    /// Push an undone operation back onto the undo stack without touching redo
    pub fn push_undone(&mut self, op: PovUndoOp) {
        self.undo_stack.push(op);
    }

    pub fn push_redo(&mut self, op: PovUndoOp) {
        self.redo_stack.push(op);
    }

    pub fn pop_redo(&mut self) -> Option<PovUndoOp> {
        self.redo_stack.pop()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.last().map(|op| op.get_description())
    }

    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(|op| op.get_description())
    }
}
