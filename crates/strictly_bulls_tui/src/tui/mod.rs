//! Terminal UI for Strictly Bulls

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{KeyCommand, command_for_key};
pub use ui::{draw, feedback_color};

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use strictly_bulls::{Notifier, SecretGenerator, Session};
use tokio::time::Duration;
use tracing::{error, info, instrument};

/// Runs the terminal UI until the player quits.
///
/// The terminal is restored even if the event loop fails.
#[instrument(skip_all)]
pub async fn run_tui<G, N>(session: Session<G, N>) -> Result<()>
where
    G: SecretGenerator,
    N: Notifier,
{
    info!("Starting Strictly Bulls TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}

/// Event loop: draw, then handle at most one key.
#[instrument(skip_all)]
async fn run_app<G, N>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<G, N>,
) -> Result<()>
where
    G: SecretGenerator,
    N: Notifier,
{
    while app.is_running() {
        terminal.draw(|f| draw(f, app.state()))?;

        // Short poll keeps the loop responsive to resizes.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        // Let the runtime reap finished sound players.
        tokio::task::yield_now().await;
    }

    Ok(())
}
