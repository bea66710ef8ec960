//! Player actions.
//!
//! Actions are the only inputs to the round state machine. Front-ends
//! translate key presses or lines of text into actions and feed them to
//! [`update`](crate::update).

use serde::{Deserialize, Serialize};

/// Something the player did.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Appends a character to the pending guess.
    Type(char),
    /// Removes the last character of the pending guess.
    Backspace,
    /// Replaces the pending guess text.
    SetGuess(String),
    /// Plays the pending guess.
    Submit,
    /// Starts a new round with a new secret.
    Replay,
}
