//! No-win invariant: a won round never stays in progress.

use super::super::typestate::GameInProgress;
use super::Invariant;

/// Invariant: no record in the history has four bulls.
pub struct NoWinningRecordInvariant;

impl Invariant<GameInProgress> for NoWinningRecordInvariant {
    fn holds(game: &GameInProgress) -> bool {
        !game.history().iter().any(|record| record.score().is_win())
    }

    fn description() -> &'static str {
        "Round in progress contains no winning guess"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GuessRecord, Rules, Score, Secret};

    #[test]
    fn test_misses_hold() {
        let mut game = GameInProgress::new(Secret::parse("1234").unwrap(), Rules::default());
        game.history
            .push(GuessRecord::new("1243".parse().unwrap(), Score::new(2, 2)));
        assert!(NoWinningRecordInvariant::holds(&game));
    }

    #[test]
    fn test_winning_record_violates() {
        let mut game = GameInProgress::new(Secret::parse("1234").unwrap(), Rules::default());
        game.history
            .push(GuessRecord::new("1234".parse().unwrap(), Score::new(4, 0)));
        assert!(!NoWinningRecordInvariant::holds(&game));
    }
}
