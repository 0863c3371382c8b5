//! User settings: game mode and log destination.
//!
//! Settings come from an optional TOML file; command-line flags override it.

use crate::cli::PlayArgs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Who plays O.
///
/// Defaults to [`GameMode::VsComputer`]: the human plays X against the search.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// The human plays X, the computer answers as O.
    #[default]
    VsComputer,
    /// Two humans share the board.
    TwoPlayer,
}

impl GameMode {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::VsComputer => "vs Computer",
            Self::TwoPlayer => "Two Players",
        }
    }

    /// Toggles between `VsComputer` and `TwoPlayer`.
    pub fn toggle(self) -> Self {
        match self {
            Self::VsComputer => Self::TwoPlayer,
            Self::TwoPlayer => Self::VsComputer,
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Who plays O.
    #[serde(default)]
    mode: GameMode,

    /// Where tracing output goes while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("gato.log")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            log_file: default_log_file(),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;
        let settings = Self::from_toml_str(&content)?;
        info!(mode = %settings.mode, "Settings loaded");
        Ok(settings)
    }

    /// Resolves settings for `play`: the file named by `--config` (or
    /// defaults), then flag overrides.
    pub fn resolve(args: &PlayArgs) -> Result<Self, ConfigError> {
        let base = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(args.mode, args.log_file.clone()))
    }

    /// Replaces fields for which an override is given.
    pub fn with_overrides(mut self, mode: Option<GameMode>, log_file: Option<PathBuf>) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
