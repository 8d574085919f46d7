//! Tests for the pattern library and letters

mod helpers;

use helpers::{blank, print_grid};
use pov_engine::patterns::library::{HEART, HEART_OUTLINE, HEART_OUTLINE_TOP, HEART_TOP, HI};
use pov_engine::patterns::{apply_named_pattern, apply_pattern, glyph, place_letter, place_text, PatternKind, LETTER_ADVANCE};
use pov_engine::PovError;

#[test]
fn test_heart_is_centered() {
    let mut grid = blank(64);
    apply_pattern(&mut grid, PatternKind::Heart);
    print_grid(&grid);

    // Top row of the heart is "0000011000110000", offset (64 - 16) / 2 = 24
    assert!(grid.get(HEART_TOP, 29));
    assert!(grid.get(HEART_TOP, 30));
    assert!(!grid.get(HEART_TOP, 31));
    assert!(grid.get(HEART_TOP, 34));
    assert!(grid.get(HEART_TOP, 35));
    assert!(!grid.get(HEART_TOP, 28));

    // Nothing outside the heart rows
    assert!((0..64).all(|col| !grid.get(0, col) && !grid.get(1, col) && !grid.get(14, col) && !grid.get(15, col)));
    assert_eq!(grid.lit_count(), HEART.cells().len());
}

#[test]
fn test_heart_on_narrow_grid_is_left_aligned() {
    let mut grid = blank(8);
    apply_pattern(&mut grid, PatternKind::Heart);
    assert!(grid.get(HEART_TOP, 5));
    assert!(grid.get(HEART_TOP, 6));
    assert!(grid.lit_cells().iter().all(|pt| pt.col < 8));
}

#[test]
fn test_heart_outline_is_centered() {
    let mut grid = blank(64);
    apply_pattern(&mut grid, PatternKind::HeartOutline);
    let offset = (64 - 11) / 2;
    assert!(grid.get(HEART_OUTLINE_TOP, offset + 2));
    assert!(grid.get(HEART_OUTLINE_TOP + 8, offset + 5));
    assert_eq!(grid.lit_count(), HEART_OUTLINE.cells().len());
}

#[test]
fn test_hi_pattern() {
    let mut grid = blank(64);
    apply_pattern(&mut grid, PatternKind::Hi);
    let offset = (64 - 13) / 2;
    // H stems and I stem
    for row in 1..=13 {
        assert!(grid.get(row, offset + 2));
        assert!(grid.get(row, offset + 6));
        assert!(grid.get(row, offset + 11));
    }
    assert!(!grid.get(0, offset + 2));
    assert_eq!(grid.lit_count(), HI.cells().len());
}

#[test]
fn test_smiley_features() {
    let mut grid = blank(64);
    apply_pattern(&mut grid, PatternKind::Smiley);
    print_grid(&grid);

    // center (8, 32), radius 7
    assert!(grid.get(8, 32));
    assert!(grid.get(1, 32));
    assert!(grid.get(15, 32));
    assert!(grid.get(8, 25));
    assert!(grid.get(8, 39));
    assert!(!grid.get(8, 24));

    // eyes at row 5, columns 29 and 35
    assert!(!grid.get(5, 29));
    assert!(!grid.get(5, 35));
    assert!(grid.get(5, 32));

    // mouth on row 11 spanning columns 29..=35, corners raised
    for col in 29..=35 {
        assert!(!grid.get(11, col), "mouth cell (11, {col}) lit");
    }
    assert!(!grid.get(10, 28));
    assert!(!grid.get(10, 36));
}

#[test]
fn test_pattern_replaces_contents() {
    let mut grid = blank(64);
    grid.set(0, 0, true);
    apply_pattern(&mut grid, PatternKind::Heart);
    assert!(!grid.get(0, 0));
}

#[test]
fn test_heart_then_clear_is_blank() {
    let mut grid = blank(64);
    apply_pattern(&mut grid, PatternKind::Heart);
    assert!(!grid.is_blank());
    grid.clear();
    assert!(grid.is_blank());
}

#[test]
fn test_unknown_pattern_leaves_grid_untouched() {
    let mut grid = blank(64);
    grid.set(3, 3, true);
    let before = grid.clone();
    let err = apply_named_pattern(&mut grid, "star").unwrap_err();
    assert_eq!(err, PovError::UnknownPattern { name: "star".to_string() });
    assert!(err.is_pattern_error());
    assert_eq!(grid, before);
}

#[test]
fn test_named_pattern() {
    let mut grid = blank(64);
    assert_eq!(apply_named_pattern(&mut grid, "smiley"), Ok(PatternKind::Smiley));
    assert!(!grid.is_blank());
}

// ═══════════════════════════════════════════════════════════════════════════
// Letters
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_place_letter_at_offset() {
    let mut grid = blank(64);
    place_letter(&mut grid, 'L', 4, 10).unwrap();
    // L: left stem plus bottom bar
    for row in 4..13 {
        assert!(grid.get(row, 10));
    }
    for col in 10..15 {
        assert!(grid.get(12, col));
    }
    assert_eq!(grid.lit_count(), 13);
}

#[test]
fn test_place_letter_does_not_clear() {
    let mut grid = blank(64);
    grid.set(0, 63, true);
    place_letter(&mut grid, 'i', 0, 0).unwrap();
    assert!(grid.get(0, 63));
    assert!(grid.get(0, 0));
}

#[test]
fn test_place_letter_clips() {
    let mut grid = blank(64);
    place_letter(&mut grid, 'T', 12, 62).unwrap();
    assert!(grid.get(12, 62));
    assert!(grid.get(12, 63));
    // the stem falls on column 64
    assert_eq!(grid.lit_count(), 2);
}

#[test]
fn test_place_letter_rejects_non_letters() {
    let mut grid = blank(64);
    let err = place_letter(&mut grid, '7', 0, 0).unwrap_err();
    assert_eq!(err, PovError::UnknownLetter { letter: '7' });
    assert!(grid.is_blank());
}

#[test]
fn test_place_text_advances() {
    let mut grid = blank(64);
    place_text(&mut grid, "I I", 0, 0).unwrap();
    let mut expected = blank(64);
    place_letter(&mut expected, 'I', 0, 0).unwrap();
    place_letter(&mut expected, 'I', 0, 2 * LETTER_ADVANCE).unwrap();
    assert_eq!(grid, expected);
}

#[test]
fn test_place_text_is_all_or_nothing() {
    let mut grid = blank(64);
    assert!(place_text(&mut grid, "HI5", 0, 0).is_err());
    assert!(grid.is_blank());
}

#[test]
fn test_every_letter_lights_cells() {
    for letter in 'A'..='Z' {
        let mut grid = blank(8);
        place_letter(&mut grid, letter, 0, 0).unwrap();
        let pattern = glyph(letter).unwrap();
        assert_eq!(grid.lit_count(), pattern.cells().len(), "{letter}");
        assert!(grid.lit_cells().iter().all(|pt| pt.row < 9 && pt.col < 5));
    }
}
