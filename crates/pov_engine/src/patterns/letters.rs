//! A-Z glyphs for free letter placement
//!
//! Each glyph is a 9 row × 5 column bitmap. Letters are stamped at an
//! arbitrary origin without clearing or centering, so several letters can
//! be combined on one grid.

use crate::{BitGrid, PovError, Result};

use super::Pattern;

pub const LETTER_WIDTH: i32 = 5;
pub const LETTER_HEIGHT: i32 = 9;

/// Horizontal distance between consecutive letters in `place_text`
pub const LETTER_ADVANCE: i32 = LETTER_WIDTH + 1;

const fn letter(rows: &'static [&'static str; 9]) -> Pattern {
    Pattern::Rows { width: LETTER_WIDTH, rows }
}

#[rustfmt::skip]
const LETTERS: [Pattern; 26] = [
    // A
    letter(&[".###.", "#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#", "#...#"]),
    // B
    letter(&["####.", "#...#", "#...#", "#...#", "####.", "#...#", "#...#", "#...#", "####."]),
    // C
    letter(&[".###.", "#...#", "#....", "#....", "#....", "#....", "#....", "#...#", ".###."]),
    // D
    letter(&["####.", "#...#", "#...#", "#...#", "#...#", "#...#", "#...#", "#...#", "####."]),
    // E
    letter(&["#####", "#....", "#....", "#....", "####.", "#....", "#....", "#....", "#####"]),
    // F
    letter(&["#####", "#....", "#....", "#....", "####.", "#....", "#....", "#....", "#...."]),
    // G
    letter(&[".###.", "#...#", "#....", "#....", "#.###", "#...#", "#...#", "#...#", ".###."]),
    // H
    letter(&["#...#", "#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#", "#...#"]),
    // I
    letter(&["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#..", "..#..", "#####"]),
    // J
    letter(&["..###", "...#.", "...#.", "...#.", "...#.", "...#.", "#..#.", "#..#.", ".##.."]),
    // K
    letter(&["#...#", "#...#", "#..#.", "#.#..", "##...", "#.#..", "#..#.", "#...#", "#...#"]),
    // L
    letter(&["#....", "#....", "#....", "#....", "#....", "#....", "#....", "#....", "#####"]),
    // M
    letter(&["#...#", "##.##", "#.#.#", "#.#.#", "#...#", "#...#", "#...#", "#...#", "#...#"]),
    // N
    letter(&["#...#", "#...#", "##..#", "##..#", "#.#.#", "#..##", "#..##", "#...#", "#...#"]),
    // O
    letter(&[".###.", "#...#", "#...#", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."]),
    // P
    letter(&["####.", "#...#", "#...#", "#...#", "####.", "#....", "#....", "#....", "#...."]),
    // Q
    letter(&[".###.", "#...#", "#...#", "#...#", "#...#", "#...#", "#.#.#", "#..#.", ".##.#"]),
    // R
    letter(&["####.", "#...#", "#...#", "#...#", "####.", "#.#..", "#..#.", "#...#", "#...#"]),
    // S
    letter(&[".###.", "#...#", "#....", "#....", ".###.", "....#", "....#", "#...#", ".###."]),
    // T
    letter(&["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#..", "..#..", "..#.."]),
    // U
    letter(&["#...#", "#...#", "#...#", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."]),
    // V
    letter(&["#...#", "#...#", "#...#", "#...#", "#...#", "#...#", ".#.#.", ".#.#.", "..#.."]),
    // W
    letter(&["#...#", "#...#", "#...#", "#...#", "#.#.#", "#.#.#", "#.#.#", "##.##", "#...#"]),
    // X
    letter(&["#...#", "#...#", ".#.#.", ".#.#.", "..#..", ".#.#.", ".#.#.", "#...#", "#...#"]),
    // Y
    letter(&["#...#", "#...#", ".#.#.", ".#.#.", "..#..", "..#..", "..#..", "..#..", "..#.."]),
    // Z
    letter(&["#####", "....#", "...#.", "...#.", "..#..", ".#...", ".#...", "#....", "#####"]),
];

/// Glyph for `letter` (case-insensitive), `None` outside A-Z
pub fn glyph(letter: char) -> Option<Pattern> {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some(LETTERS[(upper as u8 - b'A') as usize])
    } else {
        None
    }
}

/// Stamp `letter` with its top-left corner at (row, col)
pub fn place_letter(grid: &mut BitGrid, letter: char, row: i32, col: i32) -> Result<()> {
    let pattern = glyph(letter).ok_or(PovError::UnknownLetter { letter })?;
    pattern.apply(grid, row, col);
    Ok(())
}

/// Stamp a line of text starting at (row, col).
///
/// Letters advance by `LETTER_ADVANCE` columns; spaces advance without
/// drawing. Every character is checked before the first one is drawn.
pub fn place_text(grid: &mut BitGrid, text: &str, row: i32, col: i32) -> Result<()> {
    let mut glyphs = Vec::with_capacity(text.len());
    for ch in text.chars() {
        if ch == ' ' {
            glyphs.push(None);
        } else {
            glyphs.push(Some(glyph(ch).ok_or(PovError::UnknownLetter { letter: ch })?));
        }
    }

    let mut x = col;
    for pattern in glyphs.into_iter() {
        if let Some(pattern) = pattern {
            pattern.apply(grid, row, x);
        }
        x = x.saturating_add(LETTER_ADVANCE);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_glyphs_are_9x5() {
        for letter in 'A'..='Z' {
            let Some(Pattern::Rows { width, rows }) = glyph(letter) else {
                panic!("missing glyph for {letter}");
            };
            assert_eq!(width, LETTER_WIDTH);
            assert_eq!(rows.len(), LETTER_HEIGHT as usize, "{letter}");
            for r in rows {
                assert_eq!(r.len(), LETTER_WIDTH as usize, "{letter}: row {r}");
            }
        }
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let all: Vec<_> = ('A'..='Z').map(|c| glyph(c).map(|g| g.cells())).collect();
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_lowercase_maps_to_uppercase() {
        assert_eq!(glyph('q'), glyph('Q'));
        assert_eq!(glyph('1'), None);
        assert_eq!(glyph('é'), None);
    }

    #[test]
    fn test_far_origin_is_clipped() {
        let mut grid = BitGrid::new(64, 16);
        place_letter(&mut grid, 'A', i32::MAX, 0).unwrap();
        place_letter(&mut grid, 'W', 0, i32::MIN).unwrap();
        place_text(&mut grid, "AB", 0, i32::MAX - 2).unwrap();
        assert!(grid.is_blank());
    }
}
