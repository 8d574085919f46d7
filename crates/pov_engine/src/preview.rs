//! Views of a grid
//!
//! `render_text` draws the editable grid as text. `scale_to_fit` builds the
//! stretched LED preview: the grid scaled into a bounding box with the aspect
//! ratio kept, sampled nearest neighbour.

use crate::BitGrid;

/// Row index where the bottom byte of each column starts
pub const BYTE_DIVIDER_ROW: i32 = 8;

/// Render the grid one text line per row.
///
/// With `divider` set, a line of `-` separates row 7 from row 8 so the
/// top/bottom byte split is visible.
pub fn render_text(grid: &BitGrid, lit: char, unlit: char, divider: bool) -> String {
    let mut result = String::new();
    for row in 0..grid.height() {
        if divider && row == BYTE_DIVIDER_ROW {
            result.push_str(&"-".repeat(grid.width() as usize));
            result.push('\n');
        }
        for col in 0..grid.width() {
            result.push(if grid.get(row, col) { lit } else { unlit });
        }
        result.push('\n');
    }
    result
}

/// Size of the largest rectangle with the grid's aspect ratio inside max_w × max_h
pub fn fit_size(grid: &BitGrid, max_w: i32, max_h: i32) -> (i32, i32) {
    let (w, h) = (grid.width() as i64, grid.height() as i64);
    let (max_w, max_h) = (max_w.max(1) as i64, max_h.max(1) as i64);

    // Compare w/h with max_w/max_h without floating point
    if w * max_h <= h * max_w {
        let fit_w = (w * max_h / h).max(1);
        (fit_w as i32, max_h as i32)
    } else {
        let fit_h = (h * max_w / w).max(1);
        (max_w as i32, fit_h as i32)
    }
}

/// Nearest neighbour scale of `grid` into max_w × max_h, keeping the aspect ratio
pub fn scale_to_fit(grid: &BitGrid, max_w: i32, max_h: i32) -> BitGrid {
    let (fit_w, fit_h) = fit_size(grid, max_w, max_h);
    let mut result = BitGrid::new(fit_w, fit_h);
    for row in 0..fit_h {
        let src_row = (row as i64 * grid.height() as i64 / fit_h as i64) as i32;
        for col in 0..fit_w {
            let src_col = (col as i64 * grid.width() as i64 / fit_w as i64) as i32;
            result.set(row, col, grid.get(src_row, src_col));
        }
    }
    result
}
