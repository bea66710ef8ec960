//! Strictly Bulls terminal front-end
//!
//! Wires the pure game in `strictly_bulls` to a terminal.
//!
//! # Architecture
//!
//! - **CLI**: [`Cli`] selects the terminal UI, console mode or one-off scoring
//! - **Config**: [`AppConfig`] loaded from TOML, defaults when absent
//! - **Sound**: [`BellNotifier`] and [`CommandNotifier`] play cues fire-and-forget
//! - **TUI**: ratatui rendering driven by crossterm key events
//! - **Console**: line-by-line play for pipes and dumb terminals

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bootstrap;
mod cli;
mod config;
mod notifier;

pub mod console;
pub mod tui;

pub use bootstrap::{AppSession, DynSecrets, build_session, secret_source};
pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, SoundConfig, SoundMode};
pub use notifier::{BellNotifier, CommandNotifier, DynNotifier, build_notifier};
