//! Grid module - the lit/unlit LED matrix
//!
//! A `BitGrid` stores one frame for the wand as `height` rows of `width`
//! booleans. Coordinates are (row, col); row 0 is the top LED.
//! All reads and writes are bounds checked: reading outside the grid yields
//! an unlit cell and writing outside is ignored.

use serde::{Deserialize, Serialize};

use crate::Point;

/// Binary LED matrix (height × width)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitGrid {
    width: i32,
    height: i32,
    /// Row-major cells, `cells[row][col]`
    cells: Vec<Vec<bool>>,
}

impl BitGrid {
    /// Create a grid with all cells unlit.
    ///
    /// Width and height are raised to at least 1. The upper width limit of the
    /// wand hardware is checked by the caller (see `EditState::set_width`).
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![vec![false; width as usize]; height as usize],
        }
    }

    /// Build a grid from explicit rows. Short rows are padded with unlit cells.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0) as i32;
        let mut grid = Self::new(width, rows.len() as i32);
        for (row, data) in rows.iter().enumerate() {
            for (col, &lit) in data.iter().enumerate() {
                grid.set(row as i32, col as i32, lit);
            }
        }
        grid
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check if (row, col) is inside the grid
    #[inline]
    pub fn is_valid(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && row < self.height && col < self.width
    }

    /// Get cell at (row, col). Out of bounds cells read as unlit.
    #[inline]
    pub fn get(&self, row: i32, col: i32) -> bool {
        self.is_valid(row, col) && self.cells[row as usize][col as usize]
    }

    /// Set cell at (row, col). Out of bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, row: i32, col: i32, value: bool) {
        if self.is_valid(row, col) {
            self.cells[row as usize][col as usize] = value;
        }
    }

    pub fn get_point(&self, pt: Point) -> bool {
        self.get(pt.row, pt.col)
    }

    pub fn set_point(&mut self, pt: Point, value: bool) {
        self.set(pt.row, pt.col, value);
    }

    /// Reset every cell to unlit, keeping the dimensions
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(false);
        }
    }

    /// True if no cell is lit
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|&lit| !lit))
    }

    /// Number of lit cells
    pub fn lit_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&lit| lit).count()
    }

    /// All lit cells in row-major order
    pub fn lit_cells(&self) -> Vec<Point> {
        let mut result = Vec::new();
        for (row, data) in self.cells.iter().enumerate() {
            for (col, &lit) in data.iter().enumerate() {
                if lit {
                    result.push(Point::new(row as i32, col as i32));
                }
            }
        }
        result
    }

    /// Raw rows (read-only)
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.cells
    }
}
