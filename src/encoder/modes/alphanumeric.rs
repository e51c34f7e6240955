/// Alphanumeric mode validator (Mode 0010)
/// Symbols allowed besides digits, uppercase letters and whitespace
const ALPHANUMERIC_SYMBOLS: [u8; 8] = [b'$', b'%', b'*', b'+', b'-', b'.', b'/', b':'];

/// Accepts digits, `A-Z`, ASCII whitespace (space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`)
/// and `$%*+-./:`
pub struct AlphanumericValidator;

impl AlphanumericValidator {
    /// Every byte is an uppercase letter, digit, whitespace or one of `$%*+-./:`
    pub fn validate(input: &[u8]) -> bool {
        input.iter().all(|&b| Self::is_allowed(b))
    }

    fn is_allowed(b: u8) -> bool {
        // Vertical tab is whitespace here too, unlike u8::is_ascii_whitespace
        b.is_ascii_digit()
            || b.is_ascii_uppercase()
            || b.is_ascii_whitespace()
            || b == 0x0B
            || ALPHANUMERIC_SYMBOLS.contains(&b)
    }
}
