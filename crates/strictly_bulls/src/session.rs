//! A round session: state, secret source and notifier in one owner.

use super::action::Action;
use super::notify::Notifier;
use super::rules::Rules;
use super::secret::SecretGenerator;
use super::state::{GameState, update};
use tracing::{debug, instrument};

/// Owns the round state and its collaborators.
///
/// Every action runs to completion before the next is accepted. Cues
/// produced by the reducer are handed to the notifier and forgotten.
#[derive(Debug)]
pub struct Session<G, N> {
    state: GameState,
    secrets: G,
    notifier: N,
}

impl<G: SecretGenerator, N: Notifier> Session<G, N> {
    /// Starts a session with a freshly drawn secret.
    #[instrument(skip(secrets, notifier))]
    pub fn new(mut secrets: G, notifier: N, rules: Rules) -> Self {
        let state = GameState::start(&mut secrets, rules);
        Self {
            state,
            secrets,
            notifier,
        }
    }

    /// Current round state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies an action and plays the resulting cue.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> &GameState {
        let step = update(&self.state, &action, &mut self.secrets);
        if let Some(cue) = step.cue {
            debug!(%cue, "Playing cue");
            self.notifier.play(cue);
        }
        self.state = step.state;
        &self.state
    }

    /// Submits a guess typed in one go.
    #[instrument(skip(self))]
    pub fn submit(&mut self, text: &str) -> &GameState {
        self.dispatch(Action::SetGuess(text.to_string()));
        self.dispatch(Action::Submit)
    }

    /// Starts a new round.
    #[instrument(skip(self))]
    pub fn replay(&mut self) -> &GameState {
        self.dispatch(Action::Replay)
    }

    /// Returns the notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
