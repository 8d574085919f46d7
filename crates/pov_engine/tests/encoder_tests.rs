//! Tests for the firmware byte encoder

mod helpers;

use helpers::{blank, grid_from_strings};
use pov_engine::encoder::{encode, Format, ENCODED_LEN};
use pov_engine::BitGrid;
use pretty_assertions::assert_eq;

fn zero_line() -> String {
    format!("{}\n", "0x00,".repeat(16))
}

#[test]
fn test_blank_grid_encodes_to_zeros() {
    let text = encode(&blank(64), Format::Heart).to_hex_text();
    assert_eq!(text, zero_line().repeat(8));
}

#[test]
fn test_origin_sets_first_byte() {
    let mut grid = blank(64);
    grid.set(0, 0, true);
    let out = encode(&grid, Format::Heart);
    assert_eq!(out.bytes()[0], 0x01);
    assert!(out.bytes()[1..].iter().all(|&b| b == 0));

    let expected = format!("0x01,{}\n{}", "0x00,".repeat(15), zero_line().repeat(7));
    assert_eq!(out.to_string(), expected);
}

#[test]
fn test_row_eight_sets_second_byte() {
    let mut grid = blank(64);
    grid.set(8, 0, true);
    let out = encode(&grid, Format::Heart);
    assert_eq!(out.bytes()[0], 0x00);
    assert_eq!(out.bytes()[1], 0x01);
}

#[test]
fn test_column_pairs() {
    let grid = grid_from_strings(&[
        "#..#", ".#..", "..#.", "...#", "....", "....", "....", "#...",
        "#...", "....", "....", "....", "....", "....", "....", "...#",
    ]);
    let out = encode(&grid, Format::Heart);
    assert_eq!(&out.bytes()[..8], &[0x81, 0x01, 0x02, 0x00, 0x04, 0x00, 0x09, 0x80]);
    assert!(out.bytes()[8..].iter().all(|&b| b == 0));
}

#[test]
fn test_heart_uses_all_64_columns() {
    let mut grid = blank(64);
    grid.set(15, 63, true);
    let out = encode(&grid, Format::Heart);
    assert_eq!(out.bytes()[ENCODED_LEN - 1], 0x80);
}

#[test]
fn test_hanzi_ignores_columns_past_16() {
    let mut grid = blank(64);
    for col in 16..64 {
        for row in 0..16 {
            grid.set(row, col, true);
        }
    }
    let out = encode(&grid, Format::Hanzi);
    assert!(out.bytes().iter().all(|&b| b == 0));

    grid.set(3, 15, true);
    let out = encode(&grid, Format::Hanzi);
    assert_eq!(out.bytes()[30], 0x08);
    assert!(out.bytes()[32..].iter().all(|&b| b == 0));
}

#[test]
fn test_narrow_grid_is_padded() {
    let mut grid = blank(3);
    grid.set(0, 2, true);
    let out = encode(&grid, Format::Heart);
    assert_eq!(out.bytes().len(), 128);
    assert_eq!(out.bytes()[4], 0x01);
    assert_eq!(out.bytes().iter().filter(|&&b| b != 0).count(), 1);
}

#[test]
fn test_rows_past_sixteen_are_ignored() {
    let mut grid = BitGrid::new(4, 20);
    grid.set(18, 0, true);
    assert!(encode(&grid, Format::Heart).bytes().iter().all(|&b| b == 0));
}

#[test]
fn test_text_layout() {
    let mut grid = blank(64);
    grid.set(0, 63, true);
    let text = encode(&grid, Format::Heart).to_hex_text();
    let lines: Vec<&str> = text.split_terminator('\n').collect();
    assert_eq!(lines.len(), 8);
    for line in &lines {
        assert_eq!(line.len(), 16 * 5);
        assert_eq!(line.matches("0x").count(), 16);
    }
    assert!(lines[7].ends_with("0x01,0x00,"));
    assert!(text.ends_with('\n'));
}
