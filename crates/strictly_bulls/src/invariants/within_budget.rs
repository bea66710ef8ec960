//! Budget invariant: a round in progress has attempts left.

use super::super::typestate::GameInProgress;
use super::Invariant;

/// Invariant: fewer guesses than the attempt budget.
///
/// The guess that uses up the budget always finishes the round.
pub struct WithinBudgetInvariant;

impl Invariant<GameInProgress> for WithinBudgetInvariant {
    fn holds(game: &GameInProgress) -> bool {
        game.attempts() < game.rules().max_attempts()
    }

    fn description() -> &'static str {
        "Round in progress has attempts remaining"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GuessRecord, Rules, Score, Secret};

    #[test]
    fn test_fresh_round_holds() {
        let game = GameInProgress::new(Secret::parse("1234").unwrap(), Rules::new(1).unwrap());
        assert!(WithinBudgetInvariant::holds(&game));
    }

    #[test]
    fn test_exhausted_budget_violates() {
        let mut game = GameInProgress::new(Secret::parse("1234").unwrap(), Rules::new(1).unwrap());
        game.history
            .push(GuessRecord::new("5678".parse().unwrap(), Score::new(0, 0)));
        assert!(!WithinBudgetInvariant::holds(&game));
    }
}
