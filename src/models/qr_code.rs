use crate::error::AnalysisError;
use std::fmt;
use std::str::FromStr;

/// QR Code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest symbol (21x21 modules)
    pub const MIN: Version = Version(1);
    /// Largest symbol (177x177 modules)
    pub const MAX: Version = Version(40);

    /// Create a version, returning `None` outside 1-40
    pub const fn new(number: u8) -> Option<Self> {
        if number >= Self::MIN.0 && number <= Self::MAX.0 {
            Some(Version(number))
        } else {
            None
        }
    }

    /// Get the version number (1-40)
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub const fn size(self) -> usize {
        4 * (self.0 as usize) + 17
    }

    /// Iterate versions `min..=max` in increasing order
    pub fn range(min: Version, max: Version) -> impl DoubleEndedIterator<Item = Version> {
        (min.0..=max.0).map(Version)
    }

    /// Zero-based index into per-version tables
    pub(crate) const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error correction level, ordered by recovery strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// All levels from weakest to strongest
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Approximate share of codewords that can be restored
    pub fn recovery_percent(self) -> u8 {
        match self {
            ECLevel::L => 7,
            ECLevel::M => 15,
            ECLevel::Q => 25,
            ECLevel::H => 30,
        }
    }

    /// Next stronger level, or `None` at `H`
    pub fn stronger(self) -> Option<ECLevel> {
        match self {
            ECLevel::L => Some(ECLevel::M),
            ECLevel::M => Some(ECLevel::Q),
            ECLevel::Q => Some(ECLevel::H),
            ECLevel::H => None,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ECLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ECLevel::L => "L",
            ECLevel::M => "M",
            ECLevel::Q => "Q",
            ECLevel::H => "H",
        };
        f.write_str(name)
    }
}

impl FromStr for ECLevel {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(ECLevel::L),
            "m" | "medium" => Ok(ECLevel::M),
            "q" | "quartile" => Ok(ECLevel::Q),
            "h" | "high" => Ok(ECLevel::H),
            _ => Err(AnalysisError::UnknownLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_size() {
        assert_eq!(Version::MIN.size(), 21);
        assert_eq!(Version::new(2).unwrap().size(), 25);
        assert_eq!(Version::MAX.size(), 177);
    }

    #[test]
    fn test_version_bounds() {
        assert!(Version::new(0).is_none());
        assert!(Version::new(41).is_none());
        assert_eq!(Version::new(40), Some(Version::MAX));
        assert_eq!(Version::range(Version::MIN, Version::MAX).count(), 40);
    }

    #[test]
    fn test_ec_level_order() {
        assert!(ECLevel::L < ECLevel::M);
        assert!(ECLevel::Q < ECLevel::H);
        assert_eq!(ECLevel::L.stronger(), Some(ECLevel::M));
        assert_eq!(ECLevel::H.stronger(), None);
        assert_eq!(ECLevel::Q.recovery_percent(), 25);
    }

    #[test]
    fn test_ec_level_parse() {
        assert_eq!("low".parse::<ECLevel>(), Ok(ECLevel::L));
        assert_eq!("Q".parse::<ECLevel>(), Ok(ECLevel::Q));
        assert_eq!(
            "x".parse::<ECLevel>(),
            Err(AnalysisError::UnknownLevel("x".to_string()))
        );
    }
}
