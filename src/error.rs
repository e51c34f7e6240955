//! Error types for QR data analysis.

use crate::models::{ECLevel, Mode};
use thiserror::Error;

/// Errors produced while classifying input or selecting a version.
///
/// All of these are deterministic functions of the arguments: retrying with
/// the same input, level and mode reproduces the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnalysisError {
    /// Classification was attempted on zero-length input.
    #[error("encoded message cannot be empty")]
    EmptyInput,

    /// The input matches none of the supported mode rules.
    #[error(
        "input \"{}\" cannot be encoded in any supported QR mode",
        String::from_utf8_lossy(.input)
    )]
    InvalidInput {
        /// The offending input bytes.
        input: Vec<u8>,
    },

    /// The input does not fit the largest allowed version.
    #[error(
        "input of length {length} exceeds the {mode} capacity of {capacity} at level {level} by {}",
        .length.saturating_sub(*.capacity)
    )]
    TooLong {
        /// Input length in storage units.
        length: usize,
        /// Capacity of the largest version that was considered.
        capacity: usize,
        /// Requested error correction level.
        level: ECLevel,
        /// Requested encoding mode.
        mode: Mode,
    },

    /// A version range with `min > max` was requested.
    #[error("invalid version range {min}..={max}")]
    InvalidVersionRange {
        /// Lower bound.
        min: u8,
        /// Upper bound.
        max: u8,
    },

    /// A mode name could not be parsed.
    #[error("unknown mode: {0}. Use: numeric, alphanumeric, byte, kanji")]
    UnknownMode(String),

    /// An error correction level name could not be parsed.
    #[error("unknown error correction level: {0}. Use: L, M, Q, H")]
    UnknownLevel(String),
}

impl AnalysisError {
    /// How far past the capacity the input was, for [`AnalysisError::TooLong`].
    pub fn excess(&self) -> Option<usize> {
        match self {
            AnalysisError::TooLong {
                length, capacity, ..
            } => Some(length.saturating_sub(*capacity)),
            _ => None,
        }
    }
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_long_reports_excess() {
        let err = AnalysisError::TooLong {
            length: 7090,
            capacity: 7089,
            level: ECLevel::L,
            mode: Mode::Numeric,
        };
        assert_eq!(err.excess(), Some(1));
        let msg = err.to_string();
        assert!(msg.contains("by 1"), "unexpected message: {}", msg);
        assert!(msg.contains("numeric"));
    }

    #[test]
    fn test_too_long_excess_never_underflows() {
        let err = AnalysisError::TooLong {
            length: 10,
            capacity: 17,
            level: ECLevel::H,
            mode: Mode::Byte,
        };
        assert_eq!(err.excess(), Some(0));
        assert!(err.to_string().ends_with("by 0"));
    }

    #[test]
    fn test_invalid_input_message_is_lossy() {
        let err = AnalysisError::InvalidInput {
            input: vec![b'a', 0xFF],
        };
        assert!(err.to_string().starts_with("input \"a"));
        assert_eq!(err.excess(), None);
    }
}
