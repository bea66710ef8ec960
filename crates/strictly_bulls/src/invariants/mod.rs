//! First-class invariants for a round in progress.
//!
//! Invariants are logical properties that must hold after every guess.
//! They are testable independently and checked in debug builds.

use super::typestate::GameInProgress;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod no_winning_record;
pub mod scores_match_secret;
pub mod within_budget;

pub use no_winning_record::NoWinningRecordInvariant;
pub use scores_match_secret::ScoresMatchSecretInvariant;
pub use within_budget::WithinBudgetInvariant;

/// All invariants of a round in progress as a composable set.
pub type RoundInvariants = (
    WithinBudgetInvariant,
    NoWinningRecordInvariant,
    ScoresMatchSecretInvariant,
);

/// Asserts that every round invariant holds (panics in debug builds).
pub fn assert_invariants(game: &GameInProgress) {
    if cfg!(debug_assertions)
        && let Err(violations) = RoundInvariants::check_all(game)
    {
        for violation in &violations {
            warn!(description = %violation.description, "Round invariant violated");
        }
        panic!("Round invariants violated: {:?}", violations);
    }
}
