//! Character-set and encoding validators, one per QR data mode
//!
//! Each validator is a pure predicate over the whole input:
//! - Numeric: ASCII digits only
//! - Alphanumeric: digits, uppercase letters, whitespace and `$%*+-./:`
//! - Byte: structurally valid UTF-8
//! - Kanji: Shift JIS single bytes and double-byte pairs

pub mod alphanumeric;
pub mod byte;
pub mod kanji;
pub mod numeric;

pub use alphanumeric::AlphanumericValidator;
pub use byte::ByteValidator;
pub use kanji::KanjiValidator;
pub use numeric::NumericValidator;
