//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_bulls::{Cue, DEFAULT_MAX_ATTEMPTS, Rules};
use tracing::{debug, info, instrument};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Guesses allowed per round.
    #[serde(default = "default_max_attempts")]
    max_attempts: usize,

    /// File receiving logs while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Sound cue settings.
    #[serde(default)]
    sound: SoundConfig,
}

/// How cues are played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SoundMode {
    /// No sound.
    #[default]
    Off,
    /// Ring the terminal bell.
    Bell,
    /// Spawn an external audio player.
    Command,
}

/// Sound cue settings.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SoundConfig {
    /// Playback mode.
    #[serde(default)]
    mode: SoundMode,

    /// Playback volume between 0.0 and 1.0.
    #[serde(default = "default_volume")]
    volume: f32,

    /// Player command line; `{file}` and `{volume}` are substituted.
    #[serde(default = "default_command")]
    command: Vec<String>,

    /// Sound for a won round.
    #[serde(default)]
    success: Option<PathBuf>,

    /// Sound for a valid guess that did not win.
    #[serde(default)]
    fail: Option<PathBuf>,

    /// Sound for a rejected guess.
    #[serde(default)]
    invalid: Option<PathBuf>,
}

#[instrument]
fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_bulls.log")
}

#[instrument]
fn default_volume() -> f32 {
    0.25
}

#[instrument]
fn default_command() -> Vec<String> {
    [
        "ffplay",
        "-nodisp",
        "-autoexit",
        "-loglevel",
        "quiet",
        "-volume",
        "{volume}",
        "{file}",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            mode: SoundMode::default(),
            volume: default_volume(),
            command: default_command(),
            success: None,
            fail: None,
            invalid: None,
        }
    }
}

impl SoundConfig {
    /// Sound file configured for a cue.
    pub fn file_for(&self, cue: Cue) -> Option<&Path> {
        match cue {
            Cue::Success => self.success.as_deref(),
            Cue::Fail => self.fail.as_deref(),
            Cue::Invalid => self.invalid.as_deref(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(ConfigError::new(format!(
                "sound.volume must be between 0.0 and 1.0, got {}",
                self.volume
            )));
        }
        if self.mode == SoundMode::Command && self.command.is_empty() {
            return Err(ConfigError::new(
                "sound.command must not be empty in command mode".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            log_file: default_log_file(),
            sound: SoundConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration, falling back to defaults when the file is missing.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(max_attempts = config.max_attempts, sound = %config.sound.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rules()?;
        self.sound.validate()
    }

    /// Round rules described by this configuration.
    #[instrument(skip(self))]
    pub fn rules(&self) -> Result<Rules, ConfigError> {
        Rules::new(self.max_attempts).map_err(|e| ConfigError::new(e.to_string()))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
