//! Version selection: smallest symbol whose capacity holds the input
use super::tables::capacity;
use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{ECLevel, Mode, Version};

/// Minimal version lookup over the capacity table
pub struct VersionSelector;

impl VersionSelector {
    /// Smallest version in 1-40 holding `length` units
    pub fn select_for_length(
        length: usize,
        ec_level: ECLevel,
        mode: Mode,
    ) -> AnalysisResult<Version> {
        Self::select_in_range(length, ec_level, mode, Version::MIN, Version::MAX)
    }

    /// Smallest version in `min..=max` holding `length` units
    ///
    /// Capacities grow strictly with version, so the first hit of an
    /// increasing scan is minimal.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(length = length, ec_level = %ec_level, mode = %mode)
    )]
    pub fn select_in_range(
        length: usize,
        ec_level: ECLevel,
        mode: Mode,
        min: Version,
        max: Version,
    ) -> AnalysisResult<Version> {
        if min > max {
            return Err(AnalysisError::InvalidVersionRange {
                min: min.number(),
                max: max.number(),
            });
        }

        let found = Version::range(min, max).find(|&v| capacity(v, ec_level, mode) >= length);
        match found {
            Some(version) => {
                tracing::debug!(%version, "version selected");
                Ok(version)
            }
            None => Err(AnalysisError::TooLong {
                length,
                capacity: capacity(max, ec_level, mode),
                level: ec_level,
                mode,
            }),
        }
    }

    /// Strongest level at or above `ec_level` that still fits `length` in `version`
    pub fn boost_ec_level(
        length: usize,
        version: Version,
        ec_level: ECLevel,
        mode: Mode,
    ) -> ECLevel {
        let mut level = ec_level;
        while let Some(next) = level.stronger() {
            if capacity(version, next, mode) < length {
                break;
            }
            level = next;
        }
        level
    }
}
