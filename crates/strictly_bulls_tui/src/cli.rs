//! Command-line interface for strictly_bulls.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_bulls::{Guess, Secret};

/// Strictly Bulls - guess the secret 4-digit number
#[derive(Parser, Debug)]
#[command(name = "bulls")]
#[command(about = "Cows and bulls in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply if it is missing)
    #[arg(long, global = true, default_value = "strictly_bulls.toml")]
    pub config: PathBuf,

    /// Seed for reproducible secrets
    #[arg(long, global = true, conflicts_with = "fixed_secret")]
    pub seed: Option<u64>,

    /// Play every round against this secret (for debugging)
    #[arg(long = "secret", global = true)]
    pub fixed_secret: Option<Secret>,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play in the full-screen terminal UI
    Tui,

    /// Play line by line on stdin/stdout
    Console,

    /// Score a single guess against a secret
    Score {
        /// Secret: four distinct digits, not starting with 0
        secret: Secret,

        /// Guess: four distinct digits
        guess: Guess,

        /// Print the score as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The command to run, defaulting to the terminal UI.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Tui)
    }
}
