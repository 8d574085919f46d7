//! Circle drawing algorithms
//!
//! Implements the midpoint circle algorithm for outlines and a distance test
//! for filled discs. The grid is only 16 rows high, so filling simply visits
//! every cell of the target.

use crate::Point;

use super::{plot_points, DrawTarget};

/// Radius of a circle dragged from `center` to `edge`, rounded to whole cells.
/// Saturates at `i32::MAX`.
pub fn radius_to(center: Point, edge: Point) -> i32 {
    center.distance(edge).round() as i32
}

/// Outlines with a larger radius are drawn with a distance test over the
/// target instead of the midpoint walk.
pub const MAX_WALK_RADIUS: i32 = 4096;

/// Generate all points on a circle outline using the midpoint algorithm
///
/// Each step emits the eight octant reflections of (x, y). While the walk is
/// still below the diagonal, the cells one step further along each octant are
/// emitted as well so diagonal runs have no gaps. The result is sorted and
/// free of duplicates. Points that do not fit in `i32` coordinates are left
/// out.
///
/// The result grows with the radius; `draw_circle` only walks outlines that
/// can reach its target.
pub fn get_circle_points(center: Point, radius: i32) -> Vec<Point> {
    if radius <= 0 {
        return vec![center];
    }

    let mut points = Vec::new();
    let mut x = radius as i64;
    let mut y = 0_i64;
    let mut err = 0_i64;

    while x >= y {
        plot_octants(&mut points, center, x, y);
        if x > y {
            plot_octants(&mut points, center, x, y + 1);
        }

        y += 1;
        err += 1 + 2 * y;
        if 2 * (err - x) + 1 > 0 {
            x -= 1;
            err += 1 - 2 * x;
        }
    }

    points.sort();
    points.dedup();
    points
}

fn plot_octants(points: &mut Vec<Point>, c: Point, x: i64, y: i64) {
    for (dr, dc) in [(y, x), (x, y), (-y, x), (-x, y), (-y, -x), (-x, -y), (y, -x), (x, -y)] {
        let row = i32::try_from(c.row as i64 + dr);
        let col = i32::try_from(c.col as i64 + dc);
        if let (Ok(row), Ok(col)) = (row, col) {
            points.push(Point::new(row, col));
        }
    }
}

/// Check whether the outline can light any cell of the target.
///
/// Every outline cell lies within 2 of the true radius.
fn ring_reaches<T: DrawTarget>(target: &T, center: Point, radius: i32) -> bool {
    if target.width() <= 0 || target.height() <= 0 {
        return false;
    }
    let (row, col) = (center.row as i64, center.col as i64);
    let (last_row, last_col) = (target.height() as i64 - 1, target.width() as i64 - 1);
    let dist2 = |dr: i64, dc: i64| (dr as i128) * (dr as i128) + (dc as i128) * (dc as i128);

    let near = dist2(row.clamp(0, last_row) - row, col.clamp(0, last_col) - col);
    let far = dist2(row.abs().max((last_row - row).abs()), col.abs().max((last_col - col).abs()));

    let r = radius.max(0) as i128;
    if near > (r + 2) * (r + 2) {
        return false;
    }
    !(r > 2 && far < (r - 2) * (r - 2))
}

/// Light the cells of the target whose rounded distance to `center` is `radius`
fn plot_ring_band<T: DrawTarget>(target: &mut T, center: Point, radius: i32, value: bool) {
    for row in 0..target.height() {
        for col in 0..target.width() {
            let pt = Point::new(row, col);
            if center.distance(pt).round() as i64 == radius as i64 {
                target.set_pixel(pt, value);
            }
        }
    }
}

/// Draw a circle outline around `center`
///
/// Outlines that cannot reach the target are skipped without walking them.
pub fn draw_circle<T: DrawTarget>(target: &mut T, center: Point, radius: i32, value: bool) {
    if !ring_reaches(target, center, radius) {
        return;
    }
    if radius <= MAX_WALK_RADIUS {
        let points = get_circle_points(center, radius);
        plot_points(target, &points, value);
    } else {
        plot_ring_band(target, center, radius, value);
    }
}

/// Draw a circle outline around `center` passing through (or near) `edge`
pub fn draw_circle_to<T: DrawTarget>(target: &mut T, center: Point, edge: Point, value: bool) {
    draw_circle(target, center, radius_to(center, edge), value);
}

/// Check whether `pt` lies within `radius` of `center` (Euclidean, inclusive)
#[inline]
pub fn is_inside_circle(center: Point, radius: i32, pt: Point) -> bool {
    if radius < 0 {
        return false;
    }
    let dr = pt.row as i128 - center.row as i128;
    let dc = pt.col as i128 - center.col as i128;
    dr * dr + dc * dc <= (radius as i128) * (radius as i128)
}

/// Set every cell within `radius` of `center` to `value`
pub fn fill_circle<T: DrawTarget>(target: &mut T, center: Point, radius: i32, value: bool) {
    for row in 0..target.height() {
        for col in 0..target.width() {
            let pt = Point::new(row, col);
            if is_inside_circle(center, radius, pt) {
                target.set_pixel(pt, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_zero_is_single_point() {
        assert_eq!(get_circle_points(Point::new(4, 4), 0), vec![Point::new(4, 4)]);
    }

    #[test]
    fn test_radius_one_is_ring() {
        let points = get_circle_points(Point::new(0, 0), 1);
        assert_eq!(points.len(), 8);
        assert!(!points.contains(&Point::new(0, 0)));
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr != 0 || dc != 0 {
                    assert!(points.contains(&Point::new(dr, dc)), "missing ({dr}, {dc})");
                }
            }
        }
    }

    #[test]
    fn test_extremes_present() {
        let points = get_circle_points(Point::new(0, 0), 7);
        for pt in [Point::new(7, 0), Point::new(-7, 0), Point::new(0, 7), Point::new(0, -7)] {
            assert!(points.contains(&pt), "missing {pt}");
        }
    }

    #[test]
    fn test_radius_to_rounds() {
        assert_eq!(radius_to(Point::new(0, 0), Point::new(3, 4)), 5);
        assert_eq!(radius_to(Point::new(0, 0), Point::new(1, 1)), 1);
        assert_eq!(radius_to(Point::new(0, 0), Point::new(2, 2)), 3);
        assert_eq!(radius_to(Point::new(5, 5), Point::new(5, 5)), 0);
        assert_eq!(radius_to(Point::new(0, i32::MIN), Point::new(0, i32::MAX)), i32::MAX);
    }

    #[test]
    fn test_far_center_keeps_edge_points() {
        let points = get_circle_points(Point::new(0, i32::MAX - 1), 3);
        assert!(points.contains(&Point::new(0, i32::MAX - 4)));
        assert!(points.iter().all(|pt| pt.col >= i32::MAX - 4));
    }

    #[test]
    fn test_is_inside_circle() {
        let c = Point::new(0, 0);
        assert!(is_inside_circle(c, 0, c));
        assert!(is_inside_circle(c, 5, Point::new(3, 4)));
        assert!(!is_inside_circle(c, 4, Point::new(3, 4)));
        assert!(!is_inside_circle(c, -1, c));
        assert!(!is_inside_circle(Point::new(i32::MIN, i32::MIN), i32::MAX, Point::new(i32::MAX, i32::MAX)));
    }
}
