//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strictly_bulls::Action;

/// What a key press asks the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCommand {
    /// Feed an action to the round.
    Game(Action),
    /// Leave the application.
    Quit,
    /// Nothing bound to this key.
    Ignore,
}

/// Maps a key press to a command.
///
/// While the round is over only replay and quit keys do anything.
pub fn command_for_key(key: KeyEvent, round_over: bool) -> KeyCommand {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => KeyCommand::Quit,
        KeyCode::Char('c') if ctrl => KeyCommand::Quit,
        KeyCode::Char('r') if ctrl => KeyCommand::Game(Action::Replay),
        _ if ctrl => KeyCommand::Ignore,

        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') if round_over => {
            KeyCommand::Game(Action::Replay)
        }
        _ if round_over => KeyCommand::Ignore,

        KeyCode::Enter => KeyCommand::Game(Action::Submit),
        KeyCode::Backspace => KeyCommand::Game(Action::Backspace),
        KeyCode::Char(c) => KeyCommand::Game(Action::Type(c)),
        _ => KeyCommand::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_during_round() {
        assert_eq!(
            command_for_key(key(KeyCode::Char('7')), false),
            KeyCommand::Game(Action::Type('7'))
        );
        // Letters are typed too; validation rejects them on submit.
        assert_eq!(
            command_for_key(key(KeyCode::Char('r')), false),
            KeyCommand::Game(Action::Type('r'))
        );
        assert_eq!(
            command_for_key(key(KeyCode::Enter), false),
            KeyCommand::Game(Action::Submit)
        );
        assert_eq!(
            command_for_key(key(KeyCode::Backspace), false),
            KeyCommand::Game(Action::Backspace)
        );
    }

    #[test]
    fn test_round_over_only_replays() {
        assert_eq!(
            command_for_key(key(KeyCode::Enter), true),
            KeyCommand::Game(Action::Replay)
        );
        assert_eq!(
            command_for_key(key(KeyCode::Char('r')), true),
            KeyCommand::Game(Action::Replay)
        );
        assert_eq!(command_for_key(key(KeyCode::Char('5')), true), KeyCommand::Ignore);
        assert_eq!(command_for_key(key(KeyCode::Backspace), true), KeyCommand::Ignore);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(command_for_key(ctrl('c'), false), KeyCommand::Quit);
        assert_eq!(command_for_key(ctrl('r'), false), KeyCommand::Game(Action::Replay));
        assert_eq!(command_for_key(ctrl('x'), false), KeyCommand::Ignore);
        assert_eq!(command_for_key(key(KeyCode::Esc), true), KeyCommand::Quit);
    }
}
