//! Grid model, rasterizers, pattern library and byte encoder for POV LED wand
//! designs.
//!
//! A design is a 16 row `BitGrid` of up to 64 columns. It is edited through
//! an `EditState` (gestures, shapes, patterns, undo) and exported with
//! `encoder::encode` as the 128 byte table the wand firmware reads.

pub mod brushes;
pub mod edit_state;
pub mod encoder;
pub mod error;
mod grid;
pub mod patterns;
mod position;
pub mod preview;
pub mod tools;
pub mod undo_operation;
pub mod undo_stack;

pub use edit_state::{EditState, Gesture};
pub use encoder::{encode, EncodedOutput, Format};
pub use error::{PovError, Result};
pub use grid::BitGrid;
pub use patterns::{Pattern, PatternKind};
pub use position::Point;
pub use tools::Tool;
pub use undo_operation::{PovOperationType, PovUndoOp};
pub use undo_stack::{PovUndoStack, PovUndoState, DEFAULT_UNDO_LIMIT};

/// Number of LEDs on the wand
pub const GRID_HEIGHT: i32 = 16;

pub const MIN_GRID_WIDTH: i32 = 1;
pub const MAX_GRID_WIDTH: i32 = 64;
pub const DEFAULT_GRID_WIDTH: i32 = 64;
