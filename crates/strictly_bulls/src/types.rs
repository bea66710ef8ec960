//! Core domain types for cows and bulls.

use super::score::Score;
use super::validation::{GuessError, SecretError, parse_digits};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of digits in a secret and in every guess.
pub const CODE_LEN: usize = 4;

/// The hidden number for one round.
///
/// Always four distinct decimal digits with a non-zero leading digit.
/// Construct one with [`generate_secret`](crate::generate_secret) or by
/// parsing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Secret {
    digits: [u8; CODE_LEN],
}

impl Secret {
    /// Builds a secret from digits already known to satisfy the invariants.
    pub(crate) fn from_digits_unchecked(digits: [u8; CODE_LEN]) -> Self {
        debug_assert!(digits[0] != 0, "secret must not start with zero");
        Self { digits }
    }

    /// Parses a secret, rejecting malformed text, repeats and a leading zero.
    #[instrument]
    pub fn parse(text: &str) -> Result<Self, SecretError> {
        let digits = parse_digits(text)?;
        if digits[0] == 0 {
            return Err(SecretError::LeadingZero);
        }
        Ok(Self { digits })
    }

    /// Returns the digit values in position order.
    pub fn digits(&self) -> &[u8; CODE_LEN] {
        &self.digits
    }

    /// Checks whether the digit appears anywhere in the secret.
    pub fn contains(&self, digit: u8) -> bool {
        self.digits.contains(&digit)
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_digits(f, &self.digits)
    }
}

impl FromStr for Secret {
    type Err = SecretError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Secret {
    type Error = SecretError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Secret> for String {
    fn from(secret: Secret) -> Self {
        secret.to_string()
    }
}

/// A well-formed guess: four distinct decimal digits.
///
/// Unlike a [`Secret`], a guess may start with zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Guess {
    digits: [u8; CODE_LEN],
}

impl Guess {
    pub(crate) fn from_digits(digits: [u8; CODE_LEN]) -> Self {
        Self { digits }
    }

    /// Returns the digit values in position order.
    pub fn digits(&self) -> &[u8; CODE_LEN] {
        &self.digits
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_digits(f, &self.digits)
    }
}

impl FromStr for Guess {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::validation::validate_guess(s)
    }
}

impl TryFrom<String> for Guess {
    type Error = GuessError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Guess> for String {
    fn from(guess: Guess) -> Self {
        guess.to_string()
    }
}

impl PartialEq<Secret> for Guess {
    fn eq(&self, other: &Secret) -> bool {
        self.digits == other.digits
    }
}

fn write_digits(f: &mut std::fmt::Formatter<'_>, digits: &[u8; CODE_LEN]) -> std::fmt::Result {
    for digit in digits {
        write!(f, "{}", digit)?;
    }
    Ok(())
}

/// One scored guess in the round history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct GuessRecord {
    guess: Guess,
    score: Score,
}

impl GuessRecord {
    /// Returns the guess that was played.
    pub fn guess(&self) -> &Guess {
        &self.guess
    }

    /// Returns the score the guess received.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Digits in the right position.
    pub fn bulls(&self) -> u8 {
        self.score.bulls()
    }

    /// Digits present in the secret but in another position.
    pub fn cows(&self) -> u8 {
        self.score.cows()
    }
}
