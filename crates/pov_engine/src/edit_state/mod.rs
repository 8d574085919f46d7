//! Designer edit state
//!
//! Split into multiple files by concern:
//! - `state.rs` - Struct definition, constructors, getters, selectors
//! - `gesture.rs` - Pointer gestures (begin/update/commit/cancel) for all tools
//! - `shape_operations.rs` - Direct line and circle drawing
//! - `pattern_operations.rs` - Named patterns, letters, clear
//! - `undo.rs` - Undo/redo system
//! - `internal.rs` - Internal setters for undo operations

mod gesture;
mod internal;
mod pattern_operations;
mod shape_operations;
mod state;
mod undo;

pub use gesture::Gesture;
pub use state::EditState;
