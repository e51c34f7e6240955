//! Property-based tests for classification and version selection

use proptest::prelude::*;
use qr_analysis::encoder::tables::capacity;
use qr_analysis::encoder::version::VersionSelector;
use qr_analysis::{AnalysisError, ECLevel, Mode, Version, classify, select_version};

const ALPHANUMERIC_CHARS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

fn level_strategy() -> impl Strategy<Value = ECLevel> {
    prop::sample::select(ECLevel::ALL.to_vec())
}

fn mode_strategy() -> impl Strategy<Value = Mode> {
    prop::sample::select(Mode::ALL.to_vec())
}

/// Any char, including ASCII punctuation and controls, that alphanumeric mode rejects
fn outside_alphanumeric() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("must fall outside the alphanumeric set", |&c| {
        !(c.is_ascii() && ALPHANUMERIC_CHARS.contains(c)) && !"\t\n\x0B\x0C\r".contains(c)
    })
}

/// Shift JIS double-byte pairs with lead 0x81-0xFC and trail 0x40-0x4F
fn shift_jis_pairs() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec((0x81u8..=0xFC, 0x40u8..=0x4F), 1..100)
        .prop_map(|pairs| pairs.into_iter().flat_map(|(lead, trail)| [lead, trail]).collect())
}

proptest! {
    #[test]
    fn digits_classify_as_numeric(s in "[0-9]{1,200}") {
        prop_assert_eq!(classify(&s), Ok(Mode::Numeric));
    }

    #[test]
    fn alphanumeric_charset_classifies_as_alphanumeric(
        chars in prop::collection::vec(prop::sample::select(ALPHANUMERIC_CHARS.as_bytes().to_vec()), 1..200)
    ) {
        let expected = if chars.iter().all(u8::is_ascii_digit) {
            Mode::Numeric
        } else {
            Mode::Alphanumeric
        };
        prop_assert_eq!(classify(&chars), Ok(expected));
    }

    #[test]
    fn utf8_outside_alphanumeric_is_byte(
        prefix in "\\PC{0,50}",
        extra in outside_alphanumeric(),
        suffix in "\\PC{0,50}",
    ) {
        let s = format!("{}{}{}", prefix, extra, suffix);
        prop_assert_eq!(classify(&s), Ok(Mode::Byte));
    }

    #[test]
    fn shift_jis_pairs_classify_as_kanji(bytes in shift_jis_pairs()) {
        prop_assert_eq!(classify(&bytes), Ok(Mode::Kanji));
    }

    #[test]
    fn classify_is_total_or_reports_input(bytes in prop::collection::vec(any::<u8>(), 1..64)) {
        match classify(&bytes) {
            Ok(_) => {}
            Err(AnalysisError::InvalidInput { input }) => prop_assert_eq!(input, bytes),
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn version_is_monotonic(
        a in 0usize..8000,
        b in 0usize..8000,
        level in level_strategy(),
        mode in mode_strategy(),
    ) {
        let (short, long) = if a <= b { (a, b) } else { (b, a) };
        let vs = VersionSelector::select_for_length(short, level, mode);
        let vl = VersionSelector::select_for_length(long, level, mode);
        match (vs, vl) {
            (Ok(vs), Ok(vl)) => prop_assert!(vs <= vl),
            (Err(_), Ok(_)) => prop_assert!(false, "shorter input failed while longer fit"),
            _ => {}
        }
    }

    #[test]
    fn version_is_minimal(
        length in 0usize..8000,
        level in level_strategy(),
        mode in mode_strategy(),
    ) {
        if let Ok(version) = VersionSelector::select_for_length(length, level, mode) {
            prop_assert!(capacity(version, level, mode) >= length);
            if let Some(previous) = Version::new(version.number() - 1) {
                prop_assert!(capacity(previous, level, mode) < length);
            }
        } else {
            prop_assert!(capacity(Version::MAX, level, mode) < length);
        }
    }

    #[test]
    fn select_version_is_idempotent(
        s in "[0-9A-Z]{0,300}",
        level in level_strategy(),
        mode in mode_strategy(),
    ) {
        prop_assert_eq!(select_version(&s, level, mode), select_version(&s, level, mode));
    }
}

#[test]
fn empty_input_fails() {
    assert_eq!(classify(""), Err(AnalysisError::EmptyInput));
}
