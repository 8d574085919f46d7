//! Line drawing algorithms
//!
//! Implements Bresenham's line algorithm for drawing lines between two points.

use crate::Point;

use super::{plot_points, DrawTarget};

/// Endpoints further out than this are pulled in along the line before
/// rasterizing. Any grid lies well inside the box.
pub const CLIP_LIMIT: i32 = 4096;

/// Generate all points on a line from p0 to p1 using Bresenham's algorithm
///
/// The error walk always runs from the smaller endpoint (row first, then
/// column) to the larger one, so A→B and B→A light the same cells. The
/// returned points are ordered from `p0` to `p1`.
///
/// Only the part of the line inside `±CLIP_LIMIT` is generated; a line that
/// lies completely outside that box yields no points.
pub fn get_line_points(p0: Point, p1: Point) -> Vec<Point> {
    let reversed = p1 < p0;
    let (start, end) = if reversed { (p1, p0) } else { (p0, p1) };
    let Some((start, end)) = clip_to_limit(start, end) else {
        return Vec::new();
    };

    let dr = (end.row - start.row).abs();
    let dc = (end.col - start.col).abs();
    let sr = if start.row < end.row { 1 } else { -1 };
    let sc = if start.col < end.col { 1 } else { -1 };
    let mut err = (if dc > dr { dc } else { -dr }) / 2;

    let mut row = start.row;
    let mut col = start.col;
    let mut points = Vec::with_capacity((dr.max(dc) + 1) as usize);

    loop {
        points.push(Point::new(row, col));

        if row == end.row && col == end.col {
            break;
        }

        let e2 = err;
        if e2 > -dc {
            err -= dr;
            col += sc;
        }
        if e2 < dr {
            err += dc;
            row += sr;
        }
    }

    if reversed {
        points.reverse();
    }
    points
}

fn within_limit(pt: Point) -> bool {
    (-CLIP_LIMIT..=CLIP_LIMIT).contains(&pt.row) && (-CLIP_LIMIT..=CLIP_LIMIT).contains(&pt.col)
}

/// Liang-Barsky clip of the segment against the `±CLIP_LIMIT` box
fn clip_to_limit(start: Point, end: Point) -> Option<(Point, Point)> {
    if within_limit(start) && within_limit(end) {
        return Some((start, end));
    }

    let (r0, c0) = (start.row as f64, start.col as f64);
    let (dr, dc) = (end.row as f64 - r0, end.col as f64 - c0);
    let limit = CLIP_LIMIT as f64;

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [(-dr, r0 + limit), (dr, limit - r0), (-dc, c0 + limit), (dc, limit - c0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else if p < 0.0 {
            t0 = t0.max(q / p);
        } else {
            t1 = t1.min(q / p);
        }
    }
    if t0 > t1 {
        return None;
    }

    let snap = |v: f64| (v.round() as i32).clamp(-CLIP_LIMIT, CLIP_LIMIT);
    let at = |t: f64| Point::new(snap(r0 + t * dr), snap(c0 + t * dc));
    Some((at(t0), at(t1)))
}

/// Draw a line from p0 to p1
pub fn draw_line<T: DrawTarget>(target: &mut T, p0: Point, p1: Point, value: bool) {
    let points = get_line_points(p0, p1);
    plot_points(target, &points, value);
}
