//! Brush library for LED grid drawing operations
//!
//! This module provides UI-independent rasterizers for the designer.
//! The algorithms can be tested independently of any front end.
//!
//! # Features
//! - Line drawing (Bresenham algorithm, direction independent)
//! - Circle outline (midpoint algorithm with smoothing points)
//! - Filled circle (distance test over the whole target)
//!
//! Every operation writes a single value (`true` = lit, `false` = unlit)
//! and silently clips to the target bounds.
//!
//! # Example
//! ```
//! use pov_engine::brushes::{circle::draw_circle, line::draw_line};
//! use pov_engine::{BitGrid, Point};
//!
//! let mut grid = BitGrid::new(32, 16);
//! draw_line(&mut grid, Point::new(0, 0), Point::new(15, 31), true);
//! draw_circle(&mut grid, Point::new(8, 16), 5, true);
//! assert!(grid.get(0, 0));
//! ```

pub mod circle;
pub mod line;

use crate::{BitGrid, Point};

/// A trait for targets that can be drawn on
///
/// This abstraction allows the brush algorithms to work with
/// any bitmap-like structure without depending on `BitGrid`.
pub trait DrawTarget {
    /// Get the width of the drawable area
    fn width(&self) -> i32;

    /// Get the height of the drawable area
    fn height(&self) -> i32;

    /// Get the cell at a position (unlit when out of bounds)
    fn pixel(&self, pt: Point) -> bool;

    /// Set the cell at a position
    fn set_pixel(&mut self, pt: Point, value: bool);

    /// Check if a position is within bounds
    fn is_valid(&self, pt: Point) -> bool {
        pt.row >= 0 && pt.col >= 0 && pt.row < self.height() && pt.col < self.width()
    }
}

impl DrawTarget for BitGrid {
    fn width(&self) -> i32 {
        BitGrid::width(self)
    }

    fn height(&self) -> i32 {
        BitGrid::height(self)
    }

    fn pixel(&self, pt: Point) -> bool {
        self.get_point(pt)
    }

    fn set_pixel(&mut self, pt: Point, value: bool) {
        self.set_point(pt, value);
    }
}

/// Write `value` to every point, skipping those outside the target
pub fn plot_points<T: DrawTarget>(target: &mut T, points: &[Point], value: bool) {
    for &pt in points {
        if target.is_valid(pt) {
            target.set_pixel(pt, value);
        }
    }
}
