//! Shared test helpers

#![allow(dead_code)]

use pov_engine::preview::render_text;
use pov_engine::{BitGrid, Point};

/// Build a grid from `#`/`.` rows
pub fn grid_from_strings(rows: &[&str]) -> BitGrid {
    BitGrid::from_rows(rows.iter().map(|r| r.chars().map(|c| c == '#').collect()).collect())
}

/// Blank 16 row grid
pub fn blank(width: i32) -> BitGrid {
    BitGrid::new(width, 16)
}

/// Lit cells relative to `center`, sorted
pub fn relative_cells(grid: &BitGrid, center: Point) -> Vec<Point> {
    let mut cells: Vec<Point> = grid.lit_cells().into_iter().map(|pt| pt - center).collect();
    cells.sort();
    cells
}

/// Print a grid for debugging
pub fn print_grid(grid: &BitGrid) {
    print!("{}", render_text(grid, '#', '.', false));
}

/// Compare two grids, showing a readable diff on mismatch
pub fn assert_grid_equals(actual: &BitGrid, expected: &BitGrid, message: &str) {
    pretty_assertions::assert_eq!(
        render_text(actual, '#', '.', false),
        render_text(expected, '#', '.', false),
        "{}",
        message
    );
}
