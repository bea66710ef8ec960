//! Rendering checks against ratatui's test backend.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};
use strictly_bulls::{FixedSecrets, GameState, Rules, Secret, Session, SilentNotifier, Status};
use strictly_bulls_tui::tui::{App, draw};

fn render(state: &GameState) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|f| draw(f, state)).unwrap();
    terminal.backend().buffer().clone()
}

fn text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn app(secret: &str) -> App<FixedSecrets, SilentNotifier> {
    let secrets = FixedSecrets::new(Secret::parse(secret).unwrap());
    App::new(Session::new(secrets, SilentNotifier, Rules::default()))
}

fn press(app: &mut App<FixedSecrets, SilentNotifier>, keys: &str) {
    for c in keys.chars() {
        let code = if c == '\n' { KeyCode::Enter } else { KeyCode::Char(c) };
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }
}

#[test]
fn test_initial_screen() {
    let app = app("1234");
    let screen = text(&render(app.state()));

    assert!(screen.contains("Cows & Bulls"));
    assert!(screen.contains("10 attempts"));
    assert!(screen.contains("Attempts: 0 / 10"));
    assert!(screen.contains("Enter 4 digits"));
}

#[test]
fn test_history_and_feedback_rendered() {
    let mut app = app("1234");
    press(&mut app, "1243\n5678\n");
    let screen = text(&render(app.state()));

    assert!(screen.contains("#1   1243   2 bulls, 2 cows"));
    assert!(screen.contains("#2   5678   0 bulls, 0 cows"));
    assert!(screen.contains("Attempts: 2 / 10"));
}

#[test]
fn test_invalid_feedback_is_yellow() {
    let mut app = app("1234");
    press(&mut app, "1123\n");
    let buffer = render(app.state());
    let screen = text(&buffer);

    assert!(screen.contains("Digits must not repeat."));
    let has_yellow = buffer
        .content()
        .iter()
        .any(|cell| cell.symbol() == "D" && cell.fg == Color::Yellow);
    assert!(has_yellow);
}

#[test]
fn test_win_screen_offers_replay() {
    let mut app = app("1234");
    press(&mut app, "1234\n");
    assert_eq!(app.state().status(), Status::Won);

    let screen = text(&render(app.state()));
    assert!(screen.contains("Congratulations!"));
    assert!(screen.contains("play again"));

    // Typing is ignored once the round is over; Enter replays.
    press(&mut app, "5");
    assert_eq!(app.state().pending_guess(), "");
    press(&mut app, "\n");
    assert_eq!(app.state().status(), Status::InProgress);
    assert_eq!(app.state().attempts(), 0);
}

#[test]
fn test_key_release_ignored_and_escape_quits() {
    let mut app = app("1234");
    let mut release = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    app.handle_key(release);
    assert_eq!(app.state().pending_guess(), "");

    app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    assert!(!app.is_running());
}
