//! Designer Edit State
//!
//! The session object of the designer. It owns the authoritative grid, the
//! transient preview grid shown while a gesture is in progress, the tool and
//! format selectors and the undo history.
//!
//! # Two grids
//!
//! - **grid**: the committed design. Export always encodes this grid.
//! - **preview**: a copy of `grid` that exists only between `begin_gesture`
//!   and `commit_gesture`/`cancel_gesture`. All gesture writes land here.
//!
//! A front end renders `display_grid()`, which is the preview while one
//! exists and the committed grid otherwise.
//!
//! ## Undo/Redo System
//!
//! Every committed change (gesture, shape, pattern, letters, clear, resize)
//! pushes exactly one item to the undo stack. The dirty flag tracks changes
//! since the last `mark_saved`.

use crate::encoder::{encode, EncodedOutput, Format};
use crate::tools::Tool;
use crate::undo_operation::PovUndoOp;
use crate::undo_stack::PovUndoStack;
use crate::{BitGrid, PovError, Result, DEFAULT_GRID_WIDTH, GRID_HEIGHT, MAX_GRID_WIDTH, MIN_GRID_WIDTH};

use super::Gesture;

pub struct EditState {
    pub(crate) grid: BitGrid,
    pub(crate) preview: Option<BitGrid>,
    pub(crate) gesture: Option<Gesture>,

    pub(crate) tool: Tool,
    pub(crate) format: Format,

    pub(crate) undo_stack: PovUndoStack,
    pub(crate) is_dirty: bool,
}

impl Default for EditState {
    fn default() -> Self {
        Self::with_grid(BitGrid::new(DEFAULT_GRID_WIDTH, GRID_HEIGHT))
    }
}

impl EditState {
    /// Create a session with a blank grid of `width` columns
    pub fn new(width: i32) -> Result<Self> {
        check_width(width)?;
        Ok(Self::with_grid(BitGrid::new(width, GRID_HEIGHT)))
    }

    fn with_grid(grid: BitGrid) -> Self {
        Self {
            grid,
            preview: None,
            gesture: None,
            tool: Tool::default(),
            format: Format::default(),
            undo_stack: PovUndoStack::new(),
            is_dirty: false,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    /// The committed grid
    pub fn grid(&self) -> &BitGrid {
        &self.grid
    }

    /// The preview grid while a gesture is in progress
    pub fn preview(&self) -> Option<&BitGrid> {
        self.preview.as_ref()
    }

    /// The grid a front end should show
    pub fn display_grid(&self) -> &BitGrid {
        self.preview.as_ref().unwrap_or(&self.grid)
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn mark_saved(&mut self) {
        self.is_dirty = false;
    }

    pub fn undo_stack_len(&self) -> usize {
        self.undo_stack.undo_len()
    }

    pub fn redo_stack_len(&self) -> usize {
        self.undo_stack.redo_len()
    }

    pub fn undo_limit(&self) -> usize {
        self.undo_stack.limit()
    }

    /// Keep at most `limit` undo steps; older ones are forgotten
    pub fn set_undo_limit(&mut self, limit: usize) {
        log::debug!("undo limit {limit}");
        self.undo_stack.set_limit(limit);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Selectors
    // ═══════════════════════════════════════════════════════════════════════

    /// Select the tool for the next gesture. A running gesture keeps its tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn set_format(&mut self, format: Format) {
        if self.format != format {
            log::debug!("output format {} -> {}", self.format, format);
        }
        self.format = format;
    }

    /// Rebuild the grid with a new width. All cells are reset to unlit.
    ///
    /// A width outside `MIN_GRID_WIDTH..=MAX_GRID_WIDTH` is rejected and
    /// leaves the session unchanged. A running gesture is cancelled.
    pub fn set_width(&mut self, width: i32) -> Result<()> {
        if let Err(err) = check_width(width) {
            log::warn!("{err}");
            return Err(err);
        }
        self.cancel_gesture();

        let new_data = BitGrid::new(width, GRID_HEIGHT);
        if new_data == self.grid {
            return Ok(());
        }
        log::debug!("resize grid {} -> {}", self.grid.width(), width);
        self.push_undo_action(PovUndoOp::Resize {
            old_data: self.grid.clone(),
            new_data,
        });
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Export
    // ═══════════════════════════════════════════════════════════════════════

    /// Encode the committed grid with the current format
    pub fn export(&self) -> EncodedOutput {
        encode(&self.grid, self.format)
    }
}

fn check_width(width: i32) -> Result<()> {
    if (MIN_GRID_WIDTH..=MAX_GRID_WIDTH).contains(&width) {
        Ok(())
    } else {
        Err(PovError::InvalidWidth {
            width,
            min: MIN_GRID_WIDTH,
            max: MAX_GRID_WIDTH,
        })
    }
}
