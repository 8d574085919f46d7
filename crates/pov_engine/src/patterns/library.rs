//! Named patterns
//!
//! Every named pattern replaces the grid contents: the grid is cleared and
//! the pattern is drawn horizontally centered.

use std::str::FromStr;

use crate::brushes::circle::{draw_circle_to, fill_circle};
use crate::{BitGrid, Point, PovError, Result};

use super::Pattern;

/// Filled heart, 16 columns × 12 rows
pub const HEART: Pattern = Pattern::Rows {
    width: 16,
    rows: &[
        "0000011000110000",
        "0001111111111000",
        "0011111111111100",
        "0111111111111110",
        "0111111111111110",
        "0111111111111110",
        "0011111111111100",
        "0001111111111000",
        "0000111111110000",
        "0000011111100000",
        "0000001111000000",
        "0000000110000000",
    ],
};

/// First row of the filled heart
pub const HEART_TOP: i32 = 2;

/// Heart outline, 11 columns × 9 rows
#[rustfmt::skip]
pub const HEART_OUTLINE: Pattern = Pattern::Points {
    width: 11,
    points: &[
        (0, 2), (0, 3), (0, 4), (0, 6), (0, 7), (0, 8),
        (1, 1), (1, 5), (1, 9),
        (2, 0), (2, 10),
        (3, 0), (3, 10),
        (4, 1), (4, 9),
        (5, 2), (5, 8),
        (6, 3), (6, 7),
        (7, 4), (7, 6),
        (8, 5),
    ],
};

/// First row of the heart outline
pub const HEART_OUTLINE_TOP: i32 = 3;

/// "HI" mark. The column offsets start at 2 and are centered as a 13 column block.
#[rustfmt::skip]
pub const HI: Pattern = Pattern::Points {
    width: 13,
    points: &[
        // H left stem
        (1, 2), (2, 2), (3, 2), (4, 2), (5, 2), (6, 2), (7, 2),
        (8, 2), (9, 2), (10, 2), (11, 2), (12, 2), (13, 2),
        // H bar
        (6, 3), (6, 4), (6, 5),
        // H right stem
        (1, 6), (2, 6), (3, 6), (4, 6), (5, 6), (6, 6), (7, 6),
        (8, 6), (9, 6), (10, 6), (11, 6), (12, 6), (13, 6),
        // I top bar
        (1, 9), (1, 10), (1, 11), (1, 12), (1, 13),
        // I stem
        (2, 11), (3, 11), (4, 11), (5, 11), (6, 11), (7, 11),
        (8, 11), (9, 11), (10, 11), (11, 11), (12, 11),
        // I bottom bar
        (13, 9), (13, 10), (13, 11), (13, 12), (13, 13),
    ],
};

/// Largest smiley radius that still fits the 16 row grid
pub const SMILEY_MAX_RADIUS: i32 = 7;

/// The named patterns of the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Heart,
    HeartOutline,
    Hi,
    Smiley,
}

impl PatternKind {
    pub const ALL: [PatternKind; 4] = [PatternKind::Heart, PatternKind::HeartOutline, PatternKind::Hi, PatternKind::Smiley];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Heart => "heart",
            PatternKind::HeartOutline => "heart_outline",
            PatternKind::Hi => "hi",
            PatternKind::Smiley => "smiley",
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternKind {
    type Err = PovError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "heart" => Ok(PatternKind::Heart),
            "heart_outline" => Ok(PatternKind::HeartOutline),
            "hi" => Ok(PatternKind::Hi),
            "smiley" => Ok(PatternKind::Smiley),
            _ => Err(PovError::unknown_pattern(s)),
        }
    }
}

/// Clear the grid and draw `kind` onto it
pub fn apply_pattern(grid: &mut BitGrid, kind: PatternKind) {
    grid.clear();
    let width = grid.width();
    match kind {
        PatternKind::Heart => HEART.apply(grid, HEART_TOP, HEART.centered_col(width)),
        PatternKind::HeartOutline => HEART_OUTLINE.apply(grid, HEART_OUTLINE_TOP, HEART_OUTLINE.centered_col(width)),
        PatternKind::Hi => HI.apply(grid, 0, HI.centered_col(width)),
        PatternKind::Smiley => draw_smiley(grid),
    }
    log::debug!("applied pattern {kind} on {}x{} grid", grid.width(), grid.height());
}

/// Look up a pattern by name and apply it.
///
/// An unknown name is reported before the grid is touched.
pub fn apply_named_pattern(grid: &mut BitGrid, name: &str) -> Result<PatternKind> {
    let kind = name.parse::<PatternKind>()?;
    apply_pattern(grid, kind);
    Ok(kind)
}

/// Solid face with eye and mouth cut-outs.
///
/// Order matters: fill the face, cut the features, then redraw the outline.
fn draw_smiley(grid: &mut BitGrid) {
    let center = Point::new(grid.height() / 2, grid.width() / 2);
    let radius = (grid.width() / 4).min(SMILEY_MAX_RADIUS);

    fill_circle(grid, center, radius, true);

    let eye_radius = radius / 4;
    let eye_row = center.row - radius / 2;
    fill_circle(grid, Point::new(eye_row, center.col - radius / 2), eye_radius, false);
    fill_circle(grid, Point::new(eye_row, center.col + radius / 2), eye_radius, false);

    let mouth_radius = radius / 2;
    let mouth_row = center.row + radius / 2;
    for col in (center.col - mouth_radius)..=(center.col + mouth_radius) {
        grid.set(mouth_row, col, false);
    }
    for col in [center.col - mouth_radius - 1, center.col + mouth_radius + 1] {
        grid.set(mouth_row - 1, col, false);
    }

    draw_circle_to(grid, center, Point::new(center.row + radius, center.col), true);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("heart".parse::<PatternKind>(), Ok(PatternKind::Heart));
        assert_eq!("Heart-Outline".parse::<PatternKind>(), Ok(PatternKind::HeartOutline));
        assert_eq!(" HI ".parse::<PatternKind>(), Ok(PatternKind::Hi));
        assert!("star".parse::<PatternKind>().unwrap_err().is_pattern_error());
    }

    #[test]
    fn test_names_round_trip() {
        for kind in PatternKind::ALL {
            assert_eq!(kind.as_str().parse::<PatternKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_heart_dimensions() {
        assert_eq!(HEART.height(), 12);
        assert!(HEART_TOP + HEART.height() <= 16);
        assert!(HEART_OUTLINE_TOP + HEART_OUTLINE.height() <= 16);
    }
}
