use std::ops::{Add, Sub};

/// A grid cell address. Rows grow downwards, columns grow to the right.
///
/// Coordinates are signed so shapes may extend past the grid edge; the
/// grid clips anything that falls outside. `+` and `-` saturate, so an
/// offset from a far-off origin stays far off instead of wrapping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(row: {}, col: {})", self.row, self.col)
    }
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Point { row, col }
    }

    /// Euclidean distance to `other`
    pub fn distance(self, other: Point) -> f64 {
        let dr = other.row as f64 - self.row as f64;
        let dc = other.col as f64 - self.col as f64;
        dr.hypot(dc)
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Self {
        Point::new(row, col)
    }
}

impl Add<Point> for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.row.saturating_add(rhs.row), self.col.saturating_add(rhs.col))
    }
}

impl Sub<Point> for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.row.saturating_sub(rhs.row), self.col.saturating_sub(rhs.col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_saturates() {
        assert_eq!(Point::new(i32::MAX, 0) + Point::new(3, 4), Point::new(i32::MAX, 4));
        assert_eq!(Point::new(0, i32::MIN) - Point::new(0, 1), Point::new(0, i32::MIN));
    }

    #[test]
    fn test_distance_of_extremes() {
        let d = Point::new(0, i32::MIN).distance(Point::new(0, i32::MAX));
        assert_eq!(d, u32::MAX as f64);
        assert_eq!(Point::new(0, 0).distance(Point::new(3, 4)), 5.0);
    }
}
