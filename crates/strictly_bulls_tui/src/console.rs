//! Line-oriented game over any reader and writer.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_bulls::{GameState, Notifier, SecretGenerator, Session, Status};
use tracing::{debug, info, instrument};

/// Starts a new round.
pub const REPLAY_COMMAND: &str = ":replay";

/// Leaves the game.
pub const QUIT_COMMAND: &str = ":quit";

/// Plays until the input ends or the player quits.
#[instrument(skip_all)]
pub fn run<G, N, R, W>(session: &mut Session<G, N>, input: R, mut out: W) -> Result<()>
where
    G: SecretGenerator,
    N: Notifier,
    R: BufRead,
    W: Write,
{
    info!("Starting console game");
    write_intro(&mut out, session.state())?;
    prompt(&mut out, session.state())?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim_end_matches(['\r', '\n']);
        debug!(line, "Console input");

        match line {
            QUIT_COMMAND => break,
            REPLAY_COMMAND => {
                session.replay();
                writeln!(out, "New round. Good luck!")?;
            }
            text if session.state().is_over() => {
                debug!(text, "Round over, input ignored");
                writeln!(
                    out,
                    "The round is over. Type {} to play again or {} to exit.",
                    REPLAY_COMMAND, QUIT_COMMAND
                )?;
            }
            text => {
                let state = session.submit(text);
                write_feedback(&mut out, state)?;
            }
        }

        prompt(&mut out, session.state())?;
    }

    info!("Console game finished");
    out.flush()?;
    Ok(())
}

fn write_intro<W: Write>(out: &mut W, state: &GameState) -> Result<()> {
    writeln!(out, "Cows & Bulls")?;
    writeln!(out, "Guess the secret 4-digit number. No repeating digits.")?;
    writeln!(
        out,
        "Bulls are correct digits in the correct place, cows are correct digits in the wrong place."
    )?;
    writeln!(out, "You have {} attempts!", state.rules().max_attempts())?;
    Ok(())
}

fn write_feedback<W: Write>(out: &mut W, state: &GameState) -> Result<()> {
    writeln!(out, "{}", state.feedback().message())?;
    writeln!(
        out,
        "Attempts: {} / {}",
        state.attempts(),
        state.rules().max_attempts()
    )?;
    if state.status() != Status::InProgress {
        writeln!(
            out,
            "Type {} to play again or {} to exit.",
            REPLAY_COMMAND, QUIT_COMMAND
        )?;
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W, state: &GameState) -> Result<()> {
    if !state.is_over() {
        write!(out, "Guess #{}> ", state.attempts() + 1)?;
    }
    out.flush()?;
    Ok(())
}
