//! Score consistency invariant: every record agrees with the secret.

use super::super::score::score;
use super::super::typestate::GameInProgress;
use super::Invariant;

/// Invariant: each recorded score is the score of its guess.
///
/// Also bounds every record to at most four matched digits.
pub struct ScoresMatchSecretInvariant;

impl Invariant<GameInProgress> for ScoresMatchSecretInvariant {
    fn holds(game: &GameInProgress) -> bool {
        game.history().iter().all(|record| {
            let recorded = record.score();
            recorded.bulls() + recorded.cows() <= 4 && recorded == score(&game.secret, record.guess())
        })
    }

    fn description() -> &'static str {
        "Recorded scores match the secret"
    }
}
