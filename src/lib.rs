//! qr_analysis - QR code data analysis
//!
//! The first stage of QR generation: decide which encoding mode represents the
//! input in the fewest bits, then find the smallest symbol version that holds
//! it at a given error correction level. Bit-stream construction, Reed-Solomon
//! coding, module placement and masking consume the results.
//!
//! Input is taken as raw bytes (`&str`, `&[u8]`, `String`, `Vec<u8>`) since
//! Kanji-mode input is Shift JIS and therefore not valid UTF-8.
//!
//! ```
//! use qr_analysis::{ECLevel, Mode, classify, select_version};
//!
//! let mode = classify("HELLO WORLD").unwrap();
//! assert_eq!(mode, Mode::Alphanumeric);
//! let version = select_version("HELLO WORLD", ECLevel::Q, mode).unwrap();
//! assert_eq!(version.number(), 1);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Mode classification, capacity tables and version selection
pub mod encoder;
/// Error taxonomy
pub mod error;
/// Core data structures (Mode, ECLevel, Version, Analysis)
pub mod models;
/// Helpers for the command-line tools
pub mod tools;

pub use encoder::config::AnalyzerConfig;
pub use error::{AnalysisError, AnalysisResult};
pub use models::{Analysis, ECLevel, Mode, Version};

use encoder::mode_selector::ModeSelector;
use encoder::tables::{capacity, data_codewords};
use encoder::version::VersionSelector;
use rayon::prelude::*;

/// Classify input into the densest mode that represents all of it
///
/// Modes are tried in the order Numeric, Alphanumeric, Byte, Kanji.
///
/// # Errors
/// * [`AnalysisError::EmptyInput`] for zero-length input
/// * [`AnalysisError::InvalidInput`] when no mode accepts the input
pub fn classify<T: AsRef<[u8]> + ?Sized>(input: &T) -> AnalysisResult<Mode> {
    ModeSelector::classify(input.as_ref())
}

/// Select the smallest version (1-40) whose capacity holds the input
///
/// Length is measured in storage bytes. Empty input resolves to version 1;
/// rejecting it is left to [`classify`].
///
/// # Errors
/// * [`AnalysisError::TooLong`] when even version 40 is too small
pub fn select_version<T: AsRef<[u8]> + ?Sized>(
    input: &T,
    ec_level: ECLevel,
    mode: Mode,
) -> AnalysisResult<Version> {
    VersionSelector::select_for_length(input.as_ref().len(), ec_level, mode)
}

/// Classify and size the input with the environment-driven defaults
pub fn analyze<T: AsRef<[u8]> + ?Sized>(input: &T) -> AnalysisResult<Analysis> {
    Analyzer::new().analyze(input)
}

/// Analyze many inputs in parallel, results in input order
pub fn analyze_batch<T: AsRef<[u8]> + Sync>(inputs: &[T]) -> Vec<AnalysisResult<Analysis>> {
    Analyzer::new().analyze_batch(inputs)
}

/// Reusable analyzer holding an immutable configuration
///
/// Safe to share across threads; every call is independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create an analyzer configured from the `QR_*` environment variables
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::from_env())
    }

    /// Create an analyzer with explicit settings
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Classify the input, then pick its version (and level, when boosting)
    #[tracing::instrument(skip_all, fields(input_len = input.as_ref().len()))]
    pub fn analyze<T: AsRef<[u8]> + ?Sized>(&self, input: &T) -> AnalysisResult<Analysis> {
        let input = input.as_ref();
        let length = input.len();
        let mode = ModeSelector::classify(input)?;

        let config = &self.config;
        let version = VersionSelector::select_in_range(
            length,
            config.ec_level,
            mode,
            config.min_version,
            config.max_version,
        )?;

        let ec_level = if config.boost_ec {
            VersionSelector::boost_ec_level(length, version, config.ec_level, mode)
        } else {
            config.ec_level
        };
        if ec_level != config.ec_level {
            tracing::debug!(from = %config.ec_level, to = %ec_level, "error correction boosted");
        }

        Ok(Analysis {
            mode,
            version,
            ec_level,
            length,
            capacity: capacity(version, ec_level, mode),
            data_codewords: data_codewords(version, ec_level),
        })
    }

    /// Analyze many inputs in parallel, results in input order
    pub fn analyze_batch<T: AsRef<[u8]> + Sync>(
        &self,
        inputs: &[T],
    ) -> Vec<AnalysisResult<Analysis>> {
        inputs.par_iter().map(|input| self.analyze(input)).collect()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
