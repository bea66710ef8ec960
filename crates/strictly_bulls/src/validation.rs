//! Guess validation.
//!
//! A guess is accepted when it is exactly four ASCII decimal digits with no
//! digit repeated. Anything else is reported back to the player as feedback,
//! not treated as a failure of the program.

use super::types::{CODE_LEN, Guess};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Reason a guess was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum GuessError {
    /// Wrong length or a non-digit character.
    #[display("Input must be a 4-digit number.")]
    InvalidFormat,

    /// The same digit appears more than once.
    #[display("Digits must not repeat.")]
    DuplicateDigits,
}

/// Reason a secret could not be built from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum SecretError {
    /// The text is not a valid guess either.
    #[display("{}", _0)]
    Malformed(GuessError),

    /// Secrets never start with zero.
    #[display("The secret must not start with 0.")]
    LeadingZero,
}

impl From<GuessError> for SecretError {
    fn from(err: GuessError) -> Self {
        Self::Malformed(err)
    }
}

/// Checks a raw guess and returns it as a [`Guess`].
///
/// The text is taken verbatim: surrounding whitespace makes it invalid.
#[instrument]
pub fn validate_guess(text: &str) -> Result<Guess, GuessError> {
    let digits = parse_digits(text)?;
    Ok(Guess::from_digits(digits))
}

/// Parses four distinct ASCII digits.
pub(crate) fn parse_digits(text: &str) -> Result<[u8; CODE_LEN], GuessError> {
    let bytes = text.as_bytes();
    if bytes.len() != CODE_LEN || !bytes.iter().all(u8::is_ascii_digit) {
        debug!(len = bytes.len(), "Rejected guess format");
        return Err(GuessError::InvalidFormat);
    }

    let mut digits = [0u8; CODE_LEN];
    let mut seen = 0u16;
    for (slot, byte) in digits.iter_mut().zip(bytes) {
        let digit = byte - b'0';
        if seen & (1 << digit) != 0 {
            debug!(digit, "Rejected repeated digit");
            return Err(GuessError::DuplicateDigits);
        }
        seen |= 1 << digit;
        *slot = digit;
    }

    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_unique_digits() {
        let guess = validate_guess("1234").expect("valid guess");
        assert_eq!(guess.digits(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_rejects_non_digit() {
        assert_eq!(validate_guess("12a3"), Err(GuessError::InvalidFormat));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(validate_guess("123"), Err(GuessError::InvalidFormat));
        assert_eq!(validate_guess("12345"), Err(GuessError::InvalidFormat));
        assert_eq!(validate_guess(""), Err(GuessError::InvalidFormat));
    }

    #[test]
    fn test_rejects_duplicates() {
        assert_eq!(validate_guess("1123"), Err(GuessError::DuplicateDigits));
        assert_eq!(validate_guess("1231"), Err(GuessError::DuplicateDigits));
    }

    #[test]
    fn test_format_checked_before_duplicates() {
        assert_eq!(validate_guess("111"), Err(GuessError::InvalidFormat));
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        assert_eq!(validate_guess(" 1234"), Err(GuessError::InvalidFormat));
        assert_eq!(validate_guess("123 "), Err(GuessError::InvalidFormat));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digits are numeric but not ASCII.
        assert_eq!(validate_guess("١٢٣٤"), Err(GuessError::InvalidFormat));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GuessError::InvalidFormat.to_string(),
            "Input must be a 4-digit number."
        );
        assert_eq!(GuessError::DuplicateDigits.to_string(), "Digits must not repeat.");
    }
}
