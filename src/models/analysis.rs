use super::{ECLevel, Mode, Version};
use std::fmt;

/// Result of analysing one input: everything the encoding stages need to
/// build the bit stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analysis {
    /// Selected encoding mode
    pub mode: Mode,
    /// Smallest version that holds the input
    pub version: Version,
    /// Error correction level (may be stronger than requested when boosting)
    pub ec_level: ECLevel,
    /// Input length in storage units
    pub length: usize,
    /// Table capacity for (version, level, mode)
    pub capacity: usize,
    /// Data codewords available at (version, level)
    pub data_codewords: usize,
}

impl Analysis {
    /// Unused capacity in the selected symbol
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.length)
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mode={} version={} ({}x{}) level={} length={} capacity={} data_codewords={}",
            self.mode,
            self.version,
            self.version.size(),
            self.version.size(),
            self.ec_level,
            self.length,
            self.capacity,
            self.data_codewords
        )
    }
}
