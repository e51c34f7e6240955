//! Analysis defaults, overridable through environment variables
//!
//! - `QR_EC_LEVEL`: L, M, Q or H (default M)
//! - `QR_MIN_VERSION` / `QR_MAX_VERSION`: 1-40 (defaults 1 and 40)
//! - `QR_BOOST_EC`: 0 or 1 (default 0)
//!
//! Values are read once per process. Unparsable values fall back to the default.
use crate::models::{ECLevel, Version};
use std::str::FromStr;
use std::sync::OnceLock;

fn parse_env<T: FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(v) => match v.trim().parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!(var = name, value = %v, "ignoring unparsable environment value");
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_env_u8(name: &str, default: u8) -> u8 {
    parse_env(name, default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    parse_env_u8(name, u8::from(default)) != 0
}

fn parse_env_version(name: &str, default: Version) -> Version {
    let number = parse_env_u8(name, default.number()).clamp(1, 40);
    Version::new(number).unwrap_or(default)
}

static EC_LEVEL: OnceLock<ECLevel> = OnceLock::new();

pub(crate) fn ec_level() -> ECLevel {
    *EC_LEVEL.get_or_init(|| parse_env("QR_EC_LEVEL", ECLevel::M))
}

static MIN_VERSION: OnceLock<Version> = OnceLock::new();

pub(crate) fn min_version() -> Version {
    *MIN_VERSION.get_or_init(|| parse_env_version("QR_MIN_VERSION", Version::MIN))
}

static MAX_VERSION: OnceLock<Version> = OnceLock::new();

pub(crate) fn max_version() -> Version {
    *MAX_VERSION.get_or_init(|| parse_env_version("QR_MAX_VERSION", Version::MAX))
}

static BOOST_EC: OnceLock<bool> = OnceLock::new();

pub(crate) fn boost_ec() -> bool {
    *BOOST_EC.get_or_init(|| parse_env_bool_u8("QR_BOOST_EC", false))
}

/// Settings for an [`crate::Analyzer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Requested error correction level
    pub ec_level: ECLevel,
    /// Smallest version to consider
    pub min_version: Version,
    /// Largest version to consider
    pub max_version: Version,
    /// Raise the level as far as the selected version allows
    pub boost_ec: bool,
}

impl AnalyzerConfig {
    /// Build a config from the `QR_*` environment variables
    pub fn from_env() -> Self {
        Self {
            ec_level: ec_level(),
            min_version: min_version(),
            max_version: max_version(),
            boost_ec: boost_ec(),
        }
    }

    /// Override the error correction level
    pub fn with_ec_level(mut self, ec_level: ECLevel) -> Self {
        self.ec_level = ec_level;
        self
    }

    /// Limit the versions considered to `min..=max`
    pub fn with_version_range(mut self, min: Version, max: Version) -> Self {
        self.min_version = min;
        self.max_version = max;
        self
    }

    /// Enable or disable error correction boosting
    pub fn with_boost_ec(mut self, boost_ec: bool) -> Self {
        self.boost_ec = boost_ec;
        self
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            ec_level: ECLevel::M,
            min_version: Version::MIN,
            max_version: Version::MAX,
            boost_ec: false,
        }
    }
}
