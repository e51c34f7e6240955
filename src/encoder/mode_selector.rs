//! Mode classification: picks the single densest mode that accepts the input
use super::modes::{AlphanumericValidator, ByteValidator, KanjiValidator, NumericValidator};
use crate::error::{AnalysisError, AnalysisResult};
use crate::models::Mode;

/// Validators in selection priority order, first match wins.
/// Numeric and Alphanumeric are subsets of Byte and pack denser; Kanji is
/// reached only by input that is not valid UTF-8.
const MODE_CHAIN: [(Mode, fn(&[u8]) -> bool); 4] = [
    (Mode::Numeric, NumericValidator::validate),
    (Mode::Alphanumeric, AlphanumericValidator::validate),
    (Mode::Byte, ByteValidator::validate),
    (Mode::Kanji, KanjiValidator::validate),
];

/// Priority-ordered mode classifier
pub struct ModeSelector;

impl ModeSelector {
    /// Classify input into exactly one mode
    #[tracing::instrument(skip_all, fields(input_len = input.len()))]
    pub fn classify(input: &[u8]) -> AnalysisResult<Mode> {
        if input.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        for (mode, accepts) in MODE_CHAIN {
            if accepts(input) {
                tracing::debug!(%mode, "mode selected");
                return Ok(mode);
            }
            tracing::trace!(%mode, "mode rejected");
        }

        Err(AnalysisError::InvalidInput {
            input: input.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(ModeSelector::classify(b""), Err(AnalysisError::EmptyInput));
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(ModeSelector::classify(b"0123"), Ok(Mode::Numeric));
        assert_eq!(ModeSelector::classify(b"0123A"), Ok(Mode::Alphanumeric));
        assert_eq!(ModeSelector::classify(b"HTTP://X.CO"), Ok(Mode::Alphanumeric));
        assert_eq!(ModeSelector::classify(b"abc"), Ok(Mode::Byte));
        assert_eq!(ModeSelector::classify("©".as_bytes()), Ok(Mode::Byte));
    }

    #[test]
    fn test_kanji_only_for_non_utf8() {
        assert_eq!(ModeSelector::classify(&[0x81, 0x40]), Ok(Mode::Kanji));
        assert_eq!(
            ModeSelector::classify(&[0xF0, 0x9F, 0x98, 0x80]),
            Ok(Mode::Byte)
        );
        // Valid as both; Byte wins
        assert_eq!(ModeSelector::classify("日本".as_bytes()), Ok(Mode::Byte));
    }

    #[test]
    fn test_invalid_input_keeps_bytes() {
        let input = [0x80, 0x41];
        assert_eq!(
            ModeSelector::classify(&input),
            Err(AnalysisError::InvalidInput {
                input: input.to_vec()
            })
        );
    }

    #[test]
    fn test_mode_chain_matches_mode_order() {
        let chain: Vec<Mode> = MODE_CHAIN.iter().map(|(mode, _)| *mode).collect();
        assert_eq!(chain, Mode::ALL);
    }
}
