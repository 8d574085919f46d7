//! Shape drawing operations
//!
//! Direct (non-gesture) drawing with the brush algorithms. Each call is one
//! undo step.

use crate::brushes::{circle, line};
use crate::undo_operation::PovOperationType;
use crate::Point;

use super::EditState;

impl EditState {
    /// Set a single cell. Out of bounds cells are ignored.
    pub fn set_cell(&mut self, pt: Point, value: bool) -> bool {
        let mut new_data = self.grid.clone();
        new_data.set_point(pt, value);
        self.cancel_gesture();
        self.commit_grid(if value { "Draw" } else { "Erase" }, PovOperationType::EditPixels, new_data)
    }

    /// Draw a line from `p0` to `p1` using Bresenham's algorithm
    pub fn draw_line(&mut self, p0: Point, p1: Point, value: bool) -> bool {
        let mut new_data = self.grid.clone();
        line::draw_line(&mut new_data, p0, p1, value);
        self.cancel_gesture();
        self.commit_grid("Line", PovOperationType::EditPixels, new_data)
    }

    /// Draw a circle outline around `center`
    pub fn draw_circle(&mut self, center: Point, radius: i32, value: bool) -> bool {
        let mut new_data = self.grid.clone();
        circle::draw_circle(&mut new_data, center, radius, value);
        self.cancel_gesture();
        self.commit_grid("Circle", PovOperationType::EditPixels, new_data)
    }

    /// Draw a circle outline around `center` through `edge`
    pub fn draw_circle_to(&mut self, center: Point, edge: Point, value: bool) -> bool {
        self.draw_circle(center, circle::radius_to(center, edge), value)
    }

    /// Set every cell within `radius` of `center`
    pub fn fill_circle(&mut self, center: Point, radius: i32, value: bool) -> bool {
        let mut new_data = self.grid.clone();
        circle::fill_circle(&mut new_data, center, radius, value);
        self.cancel_gesture();
        self.commit_grid("Filled circle", PovOperationType::EditPixels, new_data)
    }
}
