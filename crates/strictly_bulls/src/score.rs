//! Bulls and cows scoring.

use super::types::{CODE_LEN, Guess, Secret};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of comparing one guess against the secret.
///
/// `bulls + cows` never exceeds 4 because both codes have distinct digits.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_new::new,
)]
#[display("{} bulls, {} cows", bulls, cows)]
#[serde(try_from = "RawScore")]
pub struct Score {
    bulls: u8,
    cows: u8,
}

impl Score {
    /// Digits in the right position.
    pub fn bulls(&self) -> u8 {
        self.bulls
    }

    /// Digits present in the secret but in another position.
    pub fn cows(&self) -> u8 {
        self.cows
    }

    /// True when every digit is a bull.
    pub fn is_win(&self) -> bool {
        usize::from(self.bulls) == CODE_LEN
    }
}

/// Unchecked wire form of a [`Score`].
#[derive(Deserialize)]
struct RawScore {
    bulls: u8,
    cows: u8,
}

/// A deserialized score that no guess could have produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Score of {} bulls and {} cows exceeds {} digits", bulls, cows, CODE_LEN)]
pub struct ScoreError {
    bulls: u8,
    cows: u8,
}

impl TryFrom<RawScore> for Score {
    type Error = ScoreError;

    fn try_from(raw: RawScore) -> Result<Self, Self::Error> {
        let RawScore { bulls, cows } = raw;
        if usize::from(bulls) + usize::from(cows) > CODE_LEN {
            return Err(ScoreError { bulls, cows });
        }
        Ok(Self { bulls, cows })
    }
}

/// Scores a guess against the secret.
#[instrument(level = "trace")]
pub fn score(secret: &Secret, guess: &Guess) -> Score {
    let mut bulls = 0;
    let mut cows = 0;

    for (position, digit) in guess.digits().iter().enumerate() {
        if secret.digits()[position] == *digit {
            bulls += 1;
        } else if secret.contains(*digit) {
            cows += 1;
        }
    }

    Score::new(bulls, cows)
}
