//! Phase-specific typestate structs for a round of cows and bulls.
//!
//! A round is either in progress or finished, and each phase is its own
//! type. A `GameFinished` ALWAYS has an outcome and always reveals its
//! secret; a `GameInProgress` never reveals it.

use super::invariants::assert_invariants;
use super::rules::Rules;
use super::score::score;
use super::types::{Guess, GuessRecord, Secret};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The secret was guessed.
    Won {
        /// Guesses used, including the winning one.
        attempts: usize,
    },
    /// The attempt budget ran out.
    Lost,
}

impl Outcome {
    /// Returns true if the secret was guessed.
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Won { .. })
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won { attempts } => write!(f, "Won in {} attempts", attempts),
            Outcome::Lost => write!(f, "Lost"),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Round in progress - accepts guesses.
///
/// Invariants enforced by construction:
/// - fewer attempts than the budget
/// - no record in history is a win
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInProgress {
    pub(crate) secret: Secret,
    pub(crate) history: Vec<GuessRecord>,
    pub(crate) rules: Rules,
}

impl GameInProgress {
    /// Starts a round against the given secret.
    #[instrument(skip(secret))]
    pub fn new(secret: Secret, rules: Rules) -> Self {
        Self {
            secret,
            history: Vec::new(),
            rules,
        }
    }

    /// Plays a guess, consuming self and transitioning to the next phase.
    ///
    /// Invariants are re-checked in debug builds.
    #[instrument(skip(self), fields(attempt = self.history.len() + 1))]
    pub fn submit(self, guess: Guess) -> GameResult {
        let mut game = self;
        let result = score(&game.secret, &guess);
        game.history.push(GuessRecord::new(guess, result));
        debug!(%guess, %result, "Guess scored");

        if result.is_win() {
            let attempts = game.history.len();
            info!(attempts, "Secret guessed");
            return GameResult::Finished(game.finish(Outcome::Won { attempts }));
        }

        if game.history.len() >= game.rules.max_attempts() {
            info!(attempts = game.history.len(), "Attempt budget exhausted");
            return GameResult::Finished(game.finish(Outcome::Lost));
        }

        assert_invariants(&game);
        GameResult::InProgress(game)
    }

    fn finish(self, outcome: Outcome) -> GameFinished {
        GameFinished {
            secret: self.secret,
            history: self.history,
            rules: self.rules,
            outcome,
        }
    }

    /// Returns the guesses played so far.
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Number of guesses played so far.
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// Guesses left before the round is lost.
    pub fn remaining_attempts(&self) -> usize {
        self.rules.max_attempts() - self.history.len()
    }

    /// Returns the round rules.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Replays guesses against a secret from the start of a round.
    #[instrument(skip(secret))]
    pub fn replay(secret: Secret, rules: Rules, guesses: &[Guess]) -> GameResult {
        let mut game = GameInProgress::new(secret, rules);

        for guess in guesses {
            match game.submit(*guess) {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return GameResult::Finished(g),
            }
        }

        GameResult::InProgress(game)
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Round finished - outcome determined, secret revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFinished {
    secret: Secret,
    history: Vec<GuessRecord>,
    rules: Rules,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the secret, which is no longer hidden.
    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    /// Returns the guesses played.
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Number of guesses played.
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// Returns the round rules.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Starts a new round with the same rules (consumes finished).
    #[instrument(skip_all)]
    pub fn restart(self, secret: Secret) -> GameInProgress {
        GameInProgress::new(secret, self.rules)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of playing a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    /// Round continues.
    InProgress(GameInProgress),
    /// Round finished.
    Finished(GameFinished),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> Secret {
        Secret::parse("1234").unwrap()
    }

    fn guess(text: &str) -> Guess {
        text.parse().unwrap()
    }

    #[test]
    fn test_miss_keeps_round_open() {
        let game = GameInProgress::new(secret(), Rules::default());
        match game.submit(guess("1243")) {
            GameResult::InProgress(game) => {
                assert_eq!(game.attempts(), 1);
                assert_eq!(game.remaining_attempts(), 9);
                assert_eq!(game.history()[0].bulls(), 2);
                assert_eq!(game.history()[0].cows(), 2);
            }
            GameResult::Finished(_) => panic!("round should continue"),
        }
    }

    #[test]
    fn test_single_attempt_budget_loses_on_miss() {
        let rules = Rules::new(1).unwrap();
        let game = GameInProgress::new(secret(), rules);
        match game.submit(guess("5678")) {
            GameResult::Finished(done) => {
                assert_eq!(done.outcome(), &Outcome::Lost);
                assert_eq!(done.secret(), &secret());
            }
            GameResult::InProgress(_) => panic!("budget of one must end the round"),
        }
    }

    #[test]
    fn test_win_on_last_attempt_is_a_win() {
        let rules = Rules::new(2).unwrap();
        let result = GameInProgress::replay(secret(), rules, &[guess("5678"), guess("1234")]);
        match result {
            GameResult::Finished(done) => {
                assert_eq!(done.outcome(), &Outcome::Won { attempts: 2 });
            }
            GameResult::InProgress(_) => panic!("expected finished round"),
        }
    }

    #[test]
    fn test_restart_clears_history_and_keeps_rules() {
        let rules = Rules::new(4).unwrap();
        let result = GameInProgress::replay(secret(), rules, &[guess("1234")]);
        let GameResult::Finished(done) = result else {
            panic!("expected finished round");
        };
        let next = done.restart(Secret::parse("9876").unwrap());
        assert_eq!(next.attempts(), 0);
        assert_eq!(next.rules().max_attempts(), 4);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Won { attempts: 3 }.to_string(), "Won in 3 attempts");
        assert_eq!(Outcome::Lost.to_string(), "Lost");
        assert!(!Outcome::Lost.is_win());
    }
}
