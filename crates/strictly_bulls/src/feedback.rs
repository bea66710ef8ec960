//! Feedback shown to the player after each action.

use super::notify::Cue;
use super::score::Score;
use super::types::Secret;
use super::validation::GuessError;
use serde::{Deserialize, Serialize};

/// Message shown when the secret is guessed.
pub const WIN_MESSAGE: &str = "Congratulations! You guessed the number! 🎉";

/// Style of the current feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    /// Nothing to show yet.
    #[default]
    None,
    /// The round was won.
    Success,
    /// Not correct yet, or the round was lost.
    Fail,
    /// The guess was rejected.
    Invalid,
}

impl FeedbackKind {
    /// The cue matching this kind, if any.
    pub fn cue(self) -> Option<Cue> {
        match self {
            Self::None => None,
            Self::Success => Some(Cue::Success),
            Self::Fail => Some(Cue::Fail),
            Self::Invalid => Some(Cue::Invalid),
        }
    }
}

/// Kind and text of the latest feedback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Feedback {
    kind: FeedbackKind,
    message: String,
}

impl Feedback {
    /// No feedback, as at the start of a round.
    pub fn none() -> Self {
        Self::default()
    }

    /// A rejected guess.
    pub fn invalid(err: GuessError) -> Self {
        Self {
            kind: FeedbackKind::Invalid,
            message: err.to_string(),
        }
    }

    /// A valid guess that did not end the round.
    pub fn progress(score: Score) -> Self {
        Self {
            kind: FeedbackKind::Fail,
            message: score.to_string(),
        }
    }

    /// The secret was guessed.
    pub fn won() -> Self {
        Self {
            kind: FeedbackKind::Success,
            message: WIN_MESSAGE.to_string(),
        }
    }

    /// The budget ran out; reveals the secret.
    pub fn lost(secret: &Secret) -> Self {
        Self {
            kind: FeedbackKind::Fail,
            message: format!("Game over! The number was {}.", secret),
        }
    }

    /// Returns the feedback style.
    pub fn kind(&self) -> FeedbackKind {
        self.kind
    }

    /// Returns the feedback text (empty when there is none).
    pub fn message(&self) -> &str {
        &self.message
    }
}
