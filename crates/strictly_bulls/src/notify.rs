//! Outcome cues and the capability that plays them.

use serde::{Deserialize, Serialize};

/// Sound signal for the result of a submission.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Cue {
    /// The secret was guessed.
    Success,
    /// A valid guess that did not win, including the one that loses.
    Fail,
    /// The guess was rejected.
    Invalid,
}

/// Receives cues as they happen.
///
/// Implementations must not block: playback is fire-and-forget and its
/// result never reaches the game.
pub trait Notifier {
    /// Signals a cue.
    fn play(&mut self, cue: Cue);
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn play(&mut self, cue: Cue) {
        (**self).play(cue)
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn play(&mut self, cue: Cue) {
        (**self).play(cue)
    }
}

/// Discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn play(&mut self, _cue: Cue) {}
}
