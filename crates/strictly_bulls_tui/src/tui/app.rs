//! Application state for the terminal UI.

use crossterm::event::{KeyEvent, KeyEventKind};
use strictly_bulls::{GameState, Notifier, SecretGenerator, Session};
use tracing::{debug, info, instrument};

use super::input::{KeyCommand, command_for_key};

/// Main application state.
#[derive(Debug)]
pub struct App<G, N> {
    session: Session<G, N>,
    running: bool,
}

impl<G: SecretGenerator, N: Notifier> App<G, N> {
    /// Creates a new application around a session.
    pub fn new(session: Session<G, N>) -> Self {
        Self {
            session,
            running: true,
        }
    }

    /// Current round state.
    pub fn state(&self) -> &GameState {
        self.session.state()
    }

    /// Returns the session.
    pub fn session(&self) -> &Session<G, N> {
        &self.session
    }

    /// False once the player asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Handles one key event.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        // crossterm reports releases on some platforms.
        if key.kind == KeyEventKind::Release {
            return;
        }

        match command_for_key(key, self.state().is_over()) {
            KeyCommand::Game(action) => {
                let state = self.session.dispatch(action);
                debug!(status = %state.status(), attempts = state.attempts(), "Action applied");
            }
            KeyCommand::Quit => {
                info!("User quit");
                self.running = false;
            }
            KeyCommand::Ignore => {}
        }
    }
}
