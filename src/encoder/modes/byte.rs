/// Byte mode validator (Mode 0100)
/// Accepts structurally valid UTF-8: every lead byte announces a 1-4 byte
/// sequence and every continuation byte is `10xxxxxx`.
///
/// Only the bit patterns are checked. Overlong forms and surrogate code points
/// pass, matching how the byte stream is later copied verbatim into the symbol.
pub struct ByteValidator;

impl ByteValidator {
    /// The input is structurally well-formed UTF-8
    pub fn validate(input: &[u8]) -> bool {
        let mut pending = 0usize;

        for &b in input {
            if pending == 0 {
                pending = match Self::sequence_len(b) {
                    Some(len) => len - 1,
                    None => return false,
                };
            } else {
                if b >> 6 != 0b10 {
                    return false;
                }
                pending -= 1;
            }
        }

        // Input must not end mid-character
        pending == 0
    }

    /// Sequence length announced by a lead byte
    fn sequence_len(lead: u8) -> Option<usize> {
        if lead >> 7 == 0 {
            Some(1)
        } else if lead >> 5 == 0b110 {
            Some(2)
        } else if lead >> 4 == 0b1110 {
            Some(3)
        } else if lead >> 3 == 0b11110 {
            Some(4)
        } else {
            None
        }
    }
}
