//! Strictly Bulls - cows and bulls game logic
//!
//! Pure, terminal-free implementation of the cows and bulls number game.
//!
//! # Architecture
//!
//! - **Types**: [`Secret`], [`Guess`], [`Score`], [`GuessRecord`]
//! - **Rules**: [`validate_guess`], [`score`], [`generate_secret`]
//! - **Typestate**: [`GameInProgress`] and [`GameFinished`]
//! - **Reducer**: [`GameState`] driven by [`update`]
//! - **Session**: [`Session`] wiring a [`SecretGenerator`] and a [`Notifier`]
//!
//! # Example
//!
//! ```
//! use strictly_bulls::{FixedSecrets, Rules, Secret, Session, SilentNotifier, Status};
//!
//! let secrets = FixedSecrets::new(Secret::parse("1234").unwrap());
//! let mut session = Session::new(secrets, SilentNotifier, Rules::default());
//!
//! session.submit("1243");
//! assert_eq!(session.state().feedback().message(), "2 bulls, 2 cows");
//!
//! session.submit("1234");
//! assert_eq!(session.state().status(), Status::Won);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod feedback;
mod notify;
mod rules;
mod score;
mod secret;
mod session;
mod state;
mod types;
mod typestate;
mod validation;

pub mod invariants;

pub use action::Action;
pub use feedback::{Feedback, FeedbackKind, WIN_MESSAGE};
pub use notify::{Cue, Notifier, SilentNotifier};
pub use rules::{DEFAULT_MAX_ATTEMPTS, Rules, RulesError};
pub use score::{Score, ScoreError, score};
pub use secret::{FixedSecrets, RandomSecrets, SecretGenerator, generate_secret};
pub use session::Session;
pub use state::{GameState, Phase, Status, Step, update};
pub use types::{CODE_LEN, Guess, GuessRecord, Secret};
pub use typestate::{GameFinished, GameInProgress, GameResult, Outcome};
pub use validation::{GuessError, SecretError, validate_guess};
