//! Strictly Bulls - Unified CLI
//!
//! Cows and bulls in the terminal, in several modes.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use strictly_bulls::score;
use strictly_bulls_tui::{AppConfig, Cli, Command, build_session, console, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,strictly_bulls=debug,strictly_bulls_tui=debug";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    match cli.command() {
        Command::Tui => {
            initialize_file_tracing(config.log_file())?;
            let session = build_session(&cli, &config)?;
            tui::run_tui(session).await
        }
        Command::Console => {
            initialize_stderr_tracing();
            let mut session = build_session(&cli, &config)?;
            let stdin = std::io::stdin();
            console::run(&mut session, stdin.lock(), std::io::stdout())
        }
        Command::Score {
            secret,
            guess,
            json,
        } => {
            initialize_stderr_tracing();
            let result = score(&secret, &guess);
            info!(%secret, %guess, %result, "Scored guess");
            if json {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                println!("{}", result);
            }
            Ok(())
        }
    }
}

/// Logs to a file so the terminal UI keeps the screen.
#[instrument]
fn initialize_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("File tracing initialized");
    Ok(())
}

/// Logs to stderr, keeping stdout for game output.
fn initialize_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// `RUST_LOG` if set, otherwise [`DEFAULT_FILTER`].
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
