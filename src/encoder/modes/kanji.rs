/// Kanji mode validator (Mode 1000)
/// Scans Shift JIS byte-by-byte:
/// - `0x00-0x7F` and `0xA0-0xFF` are complete single-byte units
/// - `0x81-0x9F` and `0xE0-0xEF` start a double-byte unit whose trail byte
///   lies in `0x40-0xFC` and is not `0x7F`
/// - anything else (`0x80`) is invalid
///
/// Single-byte lead ranges are tested first, so `0xE0-0xEF` never reach the
/// double-byte branch.
pub struct KanjiValidator;

impl KanjiValidator {
    /// The input splits into single-byte units and Shift JIS double-byte pairs
    pub fn validate(input: &[u8]) -> bool {
        let mut i = 0;

        while i < input.len() {
            let lead = input[i];

            if Self::is_single(lead) {
                i += 1;
                continue;
            }

            if !Self::is_double_lead(lead) {
                return false;
            }

            match input.get(i + 1) {
                Some(&trail) if Self::is_trail(trail) => i += 2,
                // Invalid trail byte or truncated pair
                _ => return false,
            }
        }

        true
    }

    fn is_single(b: u8) -> bool {
        b <= 0x7F || b >= 0xA0
    }

    fn is_double_lead(b: u8) -> bool {
        (0x81..=0x9F).contains(&b) || (0xE0..=0xEF).contains(&b)
    }

    fn is_trail(b: u8) -> bool {
        (0x40..=0xFC).contains(&b) && b != 0x7F
    }
}
