//! Byte encoder for the wand firmware
//!
//! The firmware expects a fixed 128 byte table. Every column contributes two
//! bytes: the top byte holds rows 0..8 (bit n = row n) and the bottom byte
//! holds rows 8..16 (bit n = row n + 8). Unused columns are zero padded.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{BitGrid, PovError, Result, GRID_HEIGHT};

/// Size of the exported table in bytes
pub const ENCODED_LEN: usize = 128;

/// Literals per line in the hex listing
pub const BYTES_PER_LINE: usize = 16;

/// Firmware layout selector
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Full width table, up to 64 columns
    #[default]
    Heart,
    /// 16 × 16 character table
    Hanzi,
}

impl Format {
    pub const ALL: [Format; 2] = [Format::Heart, Format::Hanzi];

    /// Number of columns the format can hold
    pub fn max_columns(&self) -> i32 {
        match self {
            Format::Heart => 64,
            Format::Hanzi => 16,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Heart => "heart",
            Format::Hanzi => "hanzi",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = PovError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "heart" => Ok(Format::Heart),
            "hanzi" => Ok(Format::Hanzi),
            _ => Err(PovError::UnknownFormat { name: s.to_string() }),
        }
    }
}

/// Packed export of one grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedOutput {
    bytes: [u8; ENCODED_LEN],
}

impl EncodedOutput {
    pub fn bytes(&self) -> &[u8; ENCODED_LEN] {
        &self.bytes
    }

    /// Render as 8 lines of 16 `0xHH,` literals, each line ending in `\n`
    pub fn to_hex_text(&self) -> String {
        let mut result = String::with_capacity(ENCODED_LEN * 5 + ENCODED_LEN / BYTES_PER_LINE);
        for line in self.bytes.chunks(BYTES_PER_LINE) {
            for b in line {
                result.push_str(&format!("0x{b:02X},"));
            }
            result.push('\n');
        }
        result
    }
}

impl std::fmt::Display for EncodedOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex_text())
    }
}

/// Pack `grid` into the firmware table for `format`
pub fn encode(grid: &BitGrid, format: Format) -> EncodedOutput {
    let mut bytes = [0u8; ENCODED_LEN];
    let columns = grid.width().min(format.max_columns()).max(0) as usize;

    for col in 0..columns {
        let mut top = 0u8;
        let mut bottom = 0u8;
        for row in 0..GRID_HEIGHT {
            if !grid.get(row, col as i32) {
                continue;
            }
            if row < 8 {
                top |= 1 << row;
            } else {
                bottom |= 1 << (row - 8);
            }
        }
        let idx = col * 2;
        if idx + 1 < ENCODED_LEN {
            bytes[idx] = top;
            bytes[idx + 1] = bottom;
        }
    }

    EncodedOutput { bytes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_grid_is_all_zero() {
        let out = encode(&BitGrid::new(64, 16), Format::Heart);
        assert!(out.bytes().iter().all(|&b| b == 0));
        let text = out.to_hex_text();
        assert_eq!(text.lines().count(), 8);
        assert_eq!(text.matches("0x00,").count(), 128);
    }

    #[test]
    fn test_top_and_bottom_bits() {
        let mut grid = BitGrid::new(4, 16);
        grid.set(0, 0, true);
        grid.set(7, 0, true);
        grid.set(15, 1, true);
        let out = encode(&grid, Format::Heart);
        assert_eq!(out.bytes()[0], 0x81);
        assert_eq!(out.bytes()[1], 0x00);
        assert_eq!(out.bytes()[2], 0x00);
        assert_eq!(out.bytes()[3], 0x80);
    }

    #[test]
    fn test_hex_text_is_uppercase() {
        let mut grid = BitGrid::new(1, 16);
        for row in 0..8 {
            grid.set(row, 0, row != 0);
        }
        let text = encode(&grid, Format::Hanzi).to_hex_text();
        assert!(text.starts_with("0xFE,0x00,"));
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("HANZI".parse::<Format>(), Ok(Format::Hanzi));
        assert_eq!(Format::Heart.to_string(), "heart");
        assert!(matches!("wide".parse::<Format>(), Err(PovError::UnknownFormat { .. })));
    }
}
