//! Pattern operations
//!
//! Named patterns replace the grid contents; letters are stamped on top of
//! it. A failing lookup happens before any write, so an error never leaves a
//! half applied pattern behind.

use crate::patterns::{self, PatternKind};
use crate::undo_operation::PovOperationType;
use crate::Result;

use super::EditState;

impl EditState {
    /// Clear the grid and draw a named pattern
    pub fn apply_pattern(&mut self, kind: PatternKind) -> bool {
        self.cancel_gesture();
        let mut new_data = self.grid.clone();
        patterns::apply_pattern(&mut new_data, kind);
        self.commit_grid(&format!("Pattern {kind}"), PovOperationType::Pattern, new_data)
    }

    /// Look up a pattern by name and apply it
    pub fn apply_named_pattern(&mut self, name: &str) -> Result<PatternKind> {
        let kind = name.parse::<PatternKind>()?;
        self.apply_pattern(kind);
        Ok(kind)
    }

    /// Stamp a letter with its top-left corner at (row, col)
    pub fn place_letter(&mut self, letter: char, row: i32, col: i32) -> Result<bool> {
        self.edit_grid(&format!("Letter {}", letter.to_ascii_uppercase()), PovOperationType::Pattern, |grid| {
            patterns::place_letter(grid, letter, row, col)
        })
    }

    /// Stamp a line of text starting at (row, col)
    pub fn place_text(&mut self, text: &str, row: i32, col: i32) -> Result<bool> {
        self.edit_grid("Text", PovOperationType::Pattern, |grid| patterns::place_text(grid, text, row, col))
    }

    /// Reset every cell to unlit
    pub fn clear(&mut self) -> bool {
        self.cancel_gesture();
        let mut new_data = self.grid.clone();
        new_data.clear();
        self.commit_grid("Clear", PovOperationType::EditPixels, new_data)
    }
}
