/// Numeric mode validator (Mode 0001)
/// Accepts input made only of ASCII digits 0-9
pub struct NumericValidator;

impl NumericValidator {
    /// Every byte is an ASCII digit
    pub fn validate(input: &[u8]) -> bool {
        input.iter().all(u8::is_ascii_digit)
    }
}
