//! Stateless UI rendering for a round.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use strictly_bulls::{CODE_LEN, FeedbackKind, GameState};

/// Renders the whole round.
pub fn draw(frame: &mut Frame, state: &GameState) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(5), // Rules
            Constraint::Length(3), // Input
            Constraint::Length(3), // Feedback
            Constraint::Length(1), // Attempts
            Constraint::Min(3),    // History
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    let title = Paragraph::new("Cows & Bulls")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_rules(frame, chunks[1], state);
    draw_input(frame, chunks[2], state);
    draw_feedback(frame, chunks[3], state);

    let attempts = Paragraph::new(Line::from(vec![
        Span::raw("Attempts: "),
        Span::styled(
            state.attempts().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" / {}", state.rules().max_attempts())),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(attempts, chunks[4]);

    draw_history(frame, chunks[5], state);
    draw_hints(frame, chunks[6], state);
}

/// Foreground color for a feedback kind.
pub fn feedback_color(kind: FeedbackKind) -> Option<Color> {
    match kind {
        FeedbackKind::None => None,
        FeedbackKind::Success => Some(Color::Green),
        FeedbackKind::Fail => Some(Color::Red),
        FeedbackKind::Invalid => Some(Color::Yellow),
    }
}

fn feedback_style(kind: FeedbackKind) -> Style {
    feedback_color(kind)
        .map(|color| Style::default().fg(color).add_modifier(Modifier::BOLD))
        .unwrap_or_default()
}

fn draw_rules(frame: &mut Frame, area: Rect, state: &GameState) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(vec![
            Span::raw("Guess the "),
            Span::styled("secret 4-digit number", bold),
            Span::raw(". No repeating digits."),
        ]),
        Line::from(vec![
            Span::styled("Bulls", bold),
            Span::raw(": correct digit, correct place. "),
            Span::styled("Cows", bold),
            Span::raw(": correct digit, wrong place."),
        ]),
        Line::from(vec![
            Span::raw("You have "),
            Span::styled(format!("{} attempts", state.rules().max_attempts()), bold),
            Span::raw("!"),
        ]),
    ];

    let rules = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(rules, area);
}

fn draw_input(frame: &mut Frame, area: Rect, state: &GameState) {
    let area = center_horizontally(area, 24);

    let (text, style, title) = if state.is_over() {
        (
            state.pending_guess().to_string(),
            Style::default().fg(Color::DarkGray),
            "Guess (round over)",
        )
    } else {
        let mut text = state.pending_guess().to_string();
        if text.chars().count() < CODE_LEN {
            text.push('_');
        }
        (text, Style::default().fg(Color::White), "Enter 4 digits")
    };

    let input = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(input, area);
}

fn draw_feedback(frame: &mut Frame, area: Rect, state: &GameState) {
    let feedback = state.feedback();
    if feedback.message().is_empty() {
        return;
    }

    let mut block = Block::default().borders(Borders::ALL);
    if state.is_over() {
        block = block.title("Final");
    }

    let message = Paragraph::new(feedback.message())
        .style(feedback_style(feedback.kind()))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(message, area);
}

fn draw_history(frame: &mut Frame, area: Rect, state: &GameState) {
    let history = state.history();
    let last = history.len().saturating_sub(1);

    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let line = format!(
                "#{:<3} {}   {} bulls, {} cows",
                index + 1,
                record.guess(),
                record.bulls(),
                record.cows()
            );
            let style = if index == last {
                feedback_style(state.feedback().kind())
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("History"));
    frame.render_widget(list, area);
}

fn draw_hints(frame: &mut Frame, area: Rect, state: &GameState) {
    let hints = if state.is_over() {
        "Enter/r: play again   Esc: quit"
    } else {
        "Enter: guess   Backspace: delete   Ctrl+R: new round   Esc: quit"
    };

    let paragraph = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn center_horizontally(area: Rect, width: u16) -> Rect {
    let side = area.width.saturating_sub(width) / 2;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(side),
            Constraint::Length(width),
            Constraint::Length(side),
        ])
        .split(area)[1]
}
