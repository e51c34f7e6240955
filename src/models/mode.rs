use super::Version;
use crate::error::AnalysisError;
use std::fmt;
use std::str::FromStr;

/// QR data encoding mode
///
/// Variants are listed in selection priority: the densest mode that accepts
/// the whole input wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Digits 0-9 (Mode 0001)
    Numeric,
    /// Digits, uppercase letters, whitespace and `$%*+-./:` (Mode 0010)
    Alphanumeric,
    /// Arbitrary UTF-8 bytes (Mode 0100)
    Byte,
    /// Shift JIS double-byte characters (Mode 1000)
    Kanji,
}

impl Mode {
    /// All modes in selection priority order
    pub const ALL: [Mode; 4] = [Mode::Numeric, Mode::Alphanumeric, Mode::Byte, Mode::Kanji];

    /// 4-bit mode indicator written at the start of a segment
    pub fn indicator(self) -> u8 {
        match self {
            Mode::Numeric => 0b0001,
            Mode::Alphanumeric => 0b0010,
            Mode::Byte => 0b0100,
            Mode::Kanji => 0b1000,
        }
    }

    /// Width of the character count indicator for a version
    pub fn char_count_bits(self, version: Version) -> u8 {
        let tier = match version.number() {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        let widths: [u8; 3] = match self {
            Mode::Numeric => [10, 12, 14],
            Mode::Alphanumeric => [9, 11, 13],
            Mode::Byte => [8, 16, 16],
            Mode::Kanji => [8, 10, 12],
        };
        widths[tier]
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Mode::Numeric => 0,
            Mode::Alphanumeric => 1,
            Mode::Byte => 2,
            Mode::Kanji => 3,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Numeric => "numeric",
            Mode::Alphanumeric => "alphanumeric",
            Mode::Byte => "byte",
            Mode::Kanji => "kanji",
        };
        f.write_str(name)
    }
}

impl FromStr for Mode {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numeric" | "num" | "n" => Ok(Mode::Numeric),
            "alphanumeric" | "alnum" | "a" => Ok(Mode::Alphanumeric),
            "byte" | "bytes" | "b" => Ok(Mode::Byte),
            "kanji" | "k" => Ok(Mode::Kanji),
            _ => Err(AnalysisError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count_bits_tiers() {
        let v9 = Version::new(9).unwrap();
        let v10 = Version::new(10).unwrap();
        let v27 = Version::new(27).unwrap();
        assert_eq!(Mode::Numeric.char_count_bits(v9), 10);
        assert_eq!(Mode::Numeric.char_count_bits(v10), 12);
        assert_eq!(Mode::Numeric.char_count_bits(v27), 14);
        assert_eq!(Mode::Byte.char_count_bits(v10), 16);
        assert_eq!(Mode::Byte.char_count_bits(v27), 16);
        assert_eq!(Mode::Kanji.char_count_bits(Version::MAX), 12);
    }

    #[test]
    fn test_mode_parse_roundtrip_names() {
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
        assert_eq!("ALNUM".parse::<Mode>(), Ok(Mode::Alphanumeric));
        assert!("utf16".parse::<Mode>().is_err());
    }

    #[test]
    fn test_indicator_bits() {
        assert_eq!(Mode::Numeric.indicator(), 1);
        assert_eq!(Mode::Kanji.indicator(), 8);
    }
}
