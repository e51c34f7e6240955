//! Helpers shared by the command-line tools
use crate::encoder::tables::capacity;
use crate::models::{ECLevel, Mode, Version};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Failure to decode a hex argument
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HexError {
    /// Odd number of hex digits
    #[error("hex input has odd length {0}")]
    OddLength(usize),
    /// Character outside `0-9a-fA-F`
    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidDigit {
        /// Offending character
        digit: char,
        /// Index in the (whitespace-stripped) input
        position: usize,
    },
}

/// Decode a hex string such as `"81 40"` or `"8140"` into bytes.
///
/// Whitespace between digits is ignored so Shift JIS pairs can be grouped.
pub fn parse_hex(text: &str) -> Result<Vec<u8>, HexError> {
    let digits: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength(digits.len()));
    }

    let nibble = |position: usize| -> Result<u8, HexError> {
        let digit = digits[position];
        digit
            .to_digit(16)
            .map(|d| d as u8)
            .ok_or(HexError::InvalidDigit { digit, position })
    };

    (0..digits.len())
        .step_by(2)
        .map(|i| -> Result<u8, HexError> { Ok((nibble(i)? << 4) | nibble(i + 1)?) })
        .collect()
}

/// Load a file as one input per line (raw bytes, trailing `\r` stripped).
///
/// Lines are kept as bytes because Shift JIS content is not UTF-8.
pub fn load_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<Vec<u8>>> {
    let content = fs::read(path)?;
    Ok(split_lines(&content))
}

fn split_lines(content: &[u8]) -> Vec<Vec<u8>> {
    let mut lines: Vec<Vec<u8>> = content
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
        .collect();
    // A trailing newline does not start another input
    if content.ends_with(b"\n") {
        lines.pop();
    }
    lines
}

/// Capacity of every version for a (level, mode) pair
pub fn capacity_rows(ec_level: ECLevel, mode: Mode) -> Vec<(Version, usize)> {
    Version::range(Version::MIN, Version::MAX)
        .map(|v| (v, capacity(v, ec_level, mode)))
        .collect()
}
