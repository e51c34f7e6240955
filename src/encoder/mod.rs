//! QR code data analysis modules
//!
//! This module contains the analysis that runs before any bits are written:
//! - Mode classification (numeric, alphanumeric, byte, kanji)
//! - Capacity and ECC block tables
//! - Minimal version selection per error correction level

/// Environment-driven analysis defaults
pub mod config;
/// Mode classification over the validator chain
pub mod mode_selector;
/// Per-mode character-set validators
pub mod modes;
/// QR specification tables (capacities, ECC codewords/blocks)
pub mod tables;
/// Version selection against the capacity table
pub mod version;
