//! Pattern library
//!
//! Pre-built shapes for the designer:
//! - `Pattern` - static shape data (coordinate list or bit-string rows)
//! - `library` - the named patterns (heart, HI, smiley) applied centered on a cleared grid
//! - `letters` - the A-Z glyphs (9 rows × 5 columns) for free placement
//!
//! Patterns only ever light cells. Composite patterns such as the smiley are
//! built with the brushes and may clear cells as part of their construction.

pub mod letters;
pub mod library;

pub use letters::{glyph, place_letter, place_text, LETTER_ADVANCE, LETTER_HEIGHT, LETTER_WIDTH};
pub use library::{apply_named_pattern, apply_pattern, PatternKind};

use crate::brushes::DrawTarget;
use crate::Point;

/// Static shape definition
///
/// Both variants describe lit cells relative to the pattern origin
/// (its top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Lit cells listed as (row, col) offsets
    Points { width: i32, points: &'static [(i32, i32)] },
    /// One string per row; `'1'` or `'#'` marks a lit cell
    Rows { width: i32, rows: &'static [&'static str] },
}

impl Pattern {
    /// Nominal width used for centering
    pub fn width(&self) -> i32 {
        match self {
            Pattern::Points { width, .. } | Pattern::Rows { width, .. } => *width,
        }
    }

    /// Number of rows covered by the pattern
    pub fn height(&self) -> i32 {
        match self {
            Pattern::Points { points, .. } => points.iter().map(|&(row, _)| row + 1).max().unwrap_or(0),
            Pattern::Rows { rows, .. } => rows.len() as i32,
        }
    }

    /// Lit cells relative to the origin
    pub fn cells(&self) -> Vec<Point> {
        match self {
            Pattern::Points { points, .. } => points.iter().map(|&(row, col)| Point::new(row, col)).collect(),
            Pattern::Rows { rows, .. } => {
                let mut result = Vec::new();
                for (row, bits) in rows.iter().enumerate() {
                    for (col, bit) in bits.bytes().enumerate() {
                        if bit == b'1' || bit == b'#' {
                            result.push(Point::new(row as i32, col as i32));
                        }
                    }
                }
                result
            }
        }
    }

    /// Column offset that centers the pattern on a grid of `grid_width`.
    /// Falls back to 0 (left aligned) when the pattern is wider than the grid.
    pub fn centered_col(&self, grid_width: i32) -> i32 {
        ((grid_width - self.width()) / 2).max(0)
    }

    /// Light the pattern's cells with its top-left corner at (origin_row, origin_col).
    /// Cells falling outside the target are skipped.
    pub fn apply<T: DrawTarget>(&self, target: &mut T, origin_row: i32, origin_col: i32) {
        let origin = Point::new(origin_row, origin_col);
        for cell in self.cells() {
            let pt = origin + cell;
            if target.is_valid(pt) {
                target.set_pixel(pt, true);
            }
        }
    }
}
