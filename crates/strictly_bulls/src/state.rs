//! Round state and the reducer that drives it.
//!
//! [`GameState`] is never mutated in place. [`update`] takes the current
//! state and an [`Action`] and returns the next state together with the cue
//! to play, so the whole state machine can be exercised without a terminal
//! or a sound device.

use super::action::Action;
use super::feedback::Feedback;
use super::notify::Cue;
use super::rules::Rules;
use super::secret::SecretGenerator;
use super::typestate::{GameFinished, GameInProgress, GameResult, Outcome};
use super::types::{CODE_LEN, GuessRecord, Secret};
use super::validation::validate_guess;
use tracing::{debug, info, instrument};

/// Coarse status of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Status {
    /// Guesses are accepted.
    InProgress,
    /// The secret was guessed.
    Won,
    /// The attempt budget ran out.
    Lost,
}

/// The typestate phase held by a [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Round in progress.
    InProgress(GameInProgress),
    /// Round over.
    Finished(GameFinished),
}

/// Everything a front-end needs to show a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    phase: Phase,
    pending_guess: String,
    feedback: Feedback,
}

impl GameState {
    /// Starts a round against the given secret.
    #[instrument(skip(secret))]
    pub fn new(secret: Secret, rules: Rules) -> Self {
        Self {
            phase: Phase::InProgress(GameInProgress::new(secret, rules)),
            pending_guess: String::new(),
            feedback: Feedback::none(),
        }
    }

    /// Starts a round with a secret drawn from the generator.
    #[instrument(skip(secrets))]
    pub fn start<G: SecretGenerator + ?Sized>(secrets: &mut G, rules: Rules) -> Self {
        Self::new(secrets.next_secret(), rules)
    }

    /// Returns the typestate phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Text typed but not yet submitted.
    pub fn pending_guess(&self) -> &str {
        &self.pending_guess
    }

    /// Latest feedback.
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Guesses played this round, oldest first.
    pub fn history(&self) -> &[GuessRecord] {
        match &self.phase {
            Phase::InProgress(game) => game.history(),
            Phase::Finished(game) => game.history(),
        }
    }

    /// Number of guesses played this round.
    pub fn attempts(&self) -> usize {
        self.history().len()
    }

    /// Returns the round rules.
    pub fn rules(&self) -> &Rules {
        match &self.phase {
            Phase::InProgress(game) => game.rules(),
            Phase::Finished(game) => game.rules(),
        }
    }

    /// Returns the coarse round status.
    pub fn status(&self) -> Status {
        match &self.phase {
            Phase::InProgress(_) => Status::InProgress,
            Phase::Finished(game) => match game.outcome() {
                Outcome::Won { .. } => Status::Won,
                Outcome::Lost => Status::Lost,
            },
        }
    }

    /// True once the round is won or lost.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// The secret, once the round is over.
    pub fn revealed_secret(&self) -> Option<&Secret> {
        match &self.phase {
            Phase::InProgress(_) => None,
            Phase::Finished(game) => Some(game.secret()),
        }
    }

    fn with_pending(&self, pending_guess: String) -> Self {
        Self {
            pending_guess,
            ..self.clone()
        }
    }
}

/// A transition: the next state and the cue it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The state after the action.
    pub state: GameState,
    /// Cue to play, if the action produced one.
    pub cue: Option<Cue>,
}

impl Step {
    fn quiet(state: GameState) -> Self {
        Self { state, cue: None }
    }

    fn with_feedback(state: GameState) -> Self {
        let cue = state.feedback.kind().cue();
        Self { state, cue }
    }
}

/// Applies an action to a state, returning the next state.
///
/// The generator is only consulted on [`Action::Replay`].
#[instrument(skip(state, secrets), fields(status = %state.status(), attempts = state.attempts()))]
pub fn update<G: SecretGenerator + ?Sized>(
    state: &GameState,
    action: &Action,
    secrets: &mut G,
) -> Step {
    match action {
        Action::Replay => {
            let rules = *state.rules();
            info!("Starting a new round");
            Step::quiet(GameState::start(secrets, rules))
        }
        _ if state.is_over() => {
            debug!(?action, "Round over, action ignored");
            Step::quiet(state.clone())
        }
        Action::Type(ch) => {
            if state.pending_guess.chars().count() >= CODE_LEN {
                return Step::quiet(state.clone());
            }
            let mut pending = state.pending_guess.clone();
            pending.push(*ch);
            Step::quiet(state.with_pending(pending))
        }
        Action::Backspace => {
            let mut pending = state.pending_guess.clone();
            pending.pop();
            Step::quiet(state.with_pending(pending))
        }
        Action::SetGuess(text) => Step::quiet(state.with_pending(text.clone())),
        Action::Submit => submit(state),
    }
}

fn submit(state: &GameState) -> Step {
    let Phase::InProgress(game) = &state.phase else {
        return Step::quiet(state.clone());
    };

    let guess = match validate_guess(&state.pending_guess) {
        Ok(guess) => guess,
        Err(err) => {
            debug!(%err, "Guess rejected");
            return Step::with_feedback(GameState {
                feedback: Feedback::invalid(err),
                ..state.clone()
            });
        }
    };

    let (phase, feedback) = match game.clone().submit(guess) {
        GameResult::InProgress(game) => {
            let last = game
                .history()
                .last()
                .map(GuessRecord::score)
                .unwrap_or_default();
            (Phase::InProgress(game), Feedback::progress(last))
        }
        GameResult::Finished(game) => {
            let feedback = match game.outcome() {
                Outcome::Won { .. } => Feedback::won(),
                Outcome::Lost => Feedback::lost(game.secret()),
            };
            (Phase::Finished(game), feedback)
        }
    };

    Step::with_feedback(GameState {
        phase,
        pending_guess: String::new(),
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FeedbackKind, FixedSecrets};

    fn secrets() -> FixedSecrets {
        FixedSecrets::new(Secret::parse("1234").unwrap()).then(Secret::parse("5678").unwrap())
    }

    fn apply(state: &GameState, actions: &[Action], secrets: &mut FixedSecrets) -> (GameState, Vec<Cue>) {
        let mut state = state.clone();
        let mut cues = Vec::new();
        for action in actions {
            let step = update(&state, action, secrets);
            cues.extend(step.cue);
            state = step.state;
        }
        (state, cues)
    }

    fn guess(text: &str) -> [Action; 2] {
        [Action::SetGuess(text.to_string()), Action::Submit]
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::start(&mut secrets(), Rules::default());
        assert_eq!(state.status(), Status::InProgress);
        assert_eq!(state.attempts(), 0);
        assert_eq!(state.feedback().kind(), FeedbackKind::None);
        assert_eq!(state.revealed_secret(), None);
    }

    #[test]
    fn test_typing_stops_at_four_characters() {
        let mut secrets = secrets();
        let state = GameState::start(&mut secrets, Rules::default());
        let typed: Vec<Action> = "123456".chars().map(Action::Type).collect();
        let (state, cues) = apply(&state, &typed, &mut secrets);
        assert_eq!(state.pending_guess(), "1234");
        assert!(cues.is_empty());
    }

    #[test]
    fn test_backspace_removes_last_character() {
        let mut secrets = secrets();
        let state = GameState::start(&mut secrets, Rules::default());
        let (state, _) = apply(
            &state,
            &[Action::Type('9'), Action::Type('8'), Action::Backspace],
            &mut secrets,
        );
        assert_eq!(state.pending_guess(), "9");
    }

    #[test]
    fn test_invalid_guess_keeps_text_and_history() {
        let mut secrets = secrets();
        let state = GameState::start(&mut secrets, Rules::default());
        let (state, cues) = apply(&state, &guess("1123"), &mut secrets);
        assert_eq!(cues, [Cue::Invalid]);
        assert_eq!(state.feedback().kind(), FeedbackKind::Invalid);
        assert_eq!(state.feedback().message(), "Digits must not repeat.");
        assert_eq!(state.pending_guess(), "1123");
        assert_eq!(state.attempts(), 0);
    }

    #[test]
    fn test_valid_miss_reports_score() {
        let mut secrets = secrets();
        let state = GameState::start(&mut secrets, Rules::default());
        let (state, cues) = apply(&state, &guess("1243"), &mut secrets);
        assert_eq!(cues, [Cue::Fail]);
        assert_eq!(state.feedback().message(), "2 bulls, 2 cows");
        assert_eq!(state.pending_guess(), "");
        assert_eq!(state.attempts(), 1);
        assert_eq!(state.status(), Status::InProgress);
    }

    #[test]
    fn test_win_ends_round_and_ignores_input() {
        let mut secrets = secrets();
        let state = GameState::start(&mut secrets, Rules::default());
        let (state, cues) = apply(&state, &guess("1234"), &mut secrets);
        assert_eq!(cues, [Cue::Success]);
        assert_eq!(state.status(), Status::Won);
        assert_eq!(state.feedback().message(), crate::WIN_MESSAGE);

        let (after, cues) = apply(&state, &[Action::Type('5'), Action::Submit], &mut secrets);
        assert!(cues.is_empty());
        assert_eq!(after, state);
    }

    #[test]
    fn test_replay_draws_new_secret_mid_round() {
        let mut secrets = secrets();
        let state = GameState::start(&mut secrets, Rules::default());
        let (state, _) = apply(&state, &guess("5678"), &mut secrets);
        let (state, cues) = apply(&state, &[Action::Replay], &mut secrets);
        assert!(cues.is_empty());
        assert_eq!(state.attempts(), 0);

        // The second fixed secret is now in play.
        let (state, _) = apply(&state, &guess("5678"), &mut secrets);
        assert_eq!(state.status(), Status::Won);
    }
}
