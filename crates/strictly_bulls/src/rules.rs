//! Round rules.

use derive_more::{Display, Error};
use serde::Serialize;
use tracing::instrument;

/// Attempts allowed per round unless configured otherwise.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Parameters fixed for the duration of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rules {
    max_attempts: usize,
}

impl Rules {
    /// Creates rules with the given attempt budget.
    #[instrument]
    pub fn new(max_attempts: usize) -> Result<Self, RulesError> {
        if max_attempts == 0 {
            return Err(RulesError::NoAttempts);
        }
        Ok(Self { max_attempts })
    }

    /// Number of guesses allowed before the round is lost.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Rejected rule parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RulesError {
    /// A round needs at least one attempt.
    #[display("max_attempts must be at least 1")]
    NoAttempts,
}
