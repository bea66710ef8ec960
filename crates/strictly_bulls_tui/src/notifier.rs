//! Sound cue players.
//!
//! Every player is fire-and-forget: failures are logged and dropped, and
//! the game never waits for playback to finish.

use crate::config::{ConfigError, SoundConfig, SoundMode};
use std::io::Write;
use std::process::Stdio;
use strictly_bulls::{Cue, Notifier, SilentNotifier};
use tracing::{debug, info, instrument, warn};

/// Boxed notifier chosen from configuration.
pub type DynNotifier = Box<dyn Notifier + Send>;

/// Rings the terminal bell for every cue.
#[derive(Debug)]
pub struct BellNotifier<W> {
    out: W,
}

impl<W: Write> BellNotifier<W> {
    /// Rings the bell on the given writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl BellNotifier<std::io::Stdout> {
    /// Rings the bell on standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Notifier for BellNotifier<W> {
    fn play(&mut self, cue: Cue) {
        let result = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!(%cue, error = %e, "Failed to ring terminal bell");
        }
    }
}

/// Spawns an external audio player per cue and never waits for it.
#[derive(Debug, Clone)]
pub struct CommandNotifier {
    sound: SoundConfig,
}

impl CommandNotifier {
    /// Creates a command notifier from sound settings.
    #[instrument(skip(sound))]
    pub fn new(sound: SoundConfig) -> Result<Self, ConfigError> {
        if sound.command().is_empty() {
            return Err(ConfigError::new(
                "sound.command must not be empty in command mode".to_string(),
            ));
        }
        Ok(Self { sound })
    }

    /// Command line for a cue, or `None` when the cue has no sound file.
    #[instrument(skip(self))]
    pub fn command_line(&self, cue: Cue) -> Option<Vec<String>> {
        let file = self.sound.file_for(cue)?;
        let file = file.display().to_string();
        let volume = ((*self.sound.volume() * 100.0).round() as u32).to_string();

        let args = self
            .sound
            .command()
            .iter()
            .map(|arg| arg.replace("{file}", &file).replace("{volume}", &volume))
            .collect();
        Some(args)
    }
}

impl Notifier for CommandNotifier {
    fn play(&mut self, cue: Cue) {
        let Some(args) = self.command_line(cue) else {
            debug!(%cue, "No sound file configured for cue");
            return;
        };
        let Some((program, rest)) = args.split_first() else {
            return;
        };

        match tokio::runtime::Handle::try_current() {
            Ok(_) => spawn_detached(cue, program, rest),
            Err(_) => spawn_with_reaper_thread(cue, program, rest),
        }
    }
}

/// Spawns on the current tokio runtime, which reaps the child once dropped.
fn spawn_detached(cue: Cue, program: &str, args: &[String]) {
    let spawned = tokio::process::Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match spawned {
        Ok(child) => debug!(%cue, pid = ?child.id(), "Sound player spawned"),
        Err(e) => warn!(%cue, program = %program, error = %e, "Failed to spawn sound player"),
    }
}

/// Spawns without a runtime; a background thread waits on the child.
fn spawn_with_reaper_thread(cue: Cue, program: &str, args: &[String]) {
    let spawned = std::process::Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    let mut child = match spawned {
        Ok(child) => child,
        Err(e) => {
            warn!(%cue, program = %program, error = %e, "Failed to spawn sound player");
            return;
        }
    };
    debug!(%cue, pid = child.id(), "Sound player spawned without runtime");

    let reaper = std::thread::Builder::new()
        .name("sound-reaper".to_string())
        .spawn(move || {
            if let Err(e) = child.wait() {
                warn!(error = %e, "Failed to wait on sound player");
            }
        });
    if let Err(e) = reaper {
        warn!(%cue, error = %e, "Failed to start sound reaper thread");
    }
}

/// Builds the notifier selected by the sound settings.
#[instrument(skip(sound), fields(mode = %sound.mode()))]
pub fn build_notifier(sound: &SoundConfig) -> Result<DynNotifier, ConfigError> {
    info!("Building sound notifier");
    let notifier: DynNotifier = match sound.mode() {
        SoundMode::Off => Box::new(SilentNotifier),
        SoundMode::Bell => Box::new(BellNotifier::stdout()),
        SoundMode::Command => Box::new(CommandNotifier::new(sound.clone())?),
    };
    Ok(notifier)
}
