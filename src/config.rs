//! Participant roster for the presentation layer.
//!
//! The game core never sees these values; they only label the X and O
//! sides on screen.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use rewind_tictactoe::Mark;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// One side of the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Participant {
    /// Display name.
    name: String,

    /// Public identifier (for example a wallet public key).
    #[serde(default)]
    public_id: Option<String>,
}

impl Participant {
    /// Public identifier, or a placeholder when none is configured.
    pub fn public_id_or_placeholder(&self) -> &str {
        self.public_id.as_deref().unwrap_or("(no public id)")
    }
}

/// Immutable application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Participant playing X.
    #[serde(default = "default_x")]
    x: Participant,

    /// Participant playing O.
    #[serde(default = "default_o")]
    o: Participant,
}

#[instrument]
fn default_x() -> Participant {
    Participant::new("Player X".to_string(), None)
}

#[instrument]
fn default_o() -> Participant {
    Participant::new("Player O".to_string(), None)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            x: default_x(),
            o: default_o(),
        }
    }
}

impl AppConfig {
    /// Creates a configuration from two participants.
    pub fn new(x: Participant, o: Participant) -> Self {
        Self { x, o }
    }

    /// The participant playing `mark`.
    pub fn participant(&self, mark: Mark) -> &Participant {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(x = %config.x.name, o = %config.o.name, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using default participants");
                Ok(Self::default())
            }
        }
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
