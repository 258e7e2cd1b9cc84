//! Configuration loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "rewind.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Terminal rendering options.
    display: DisplayConfig,

    /// Log filter and destination.
    logging: LoggingConfig,
}

/// Terminal rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Highlight the cell that produced the viewed board.
    highlight_last_move: bool,

    /// Show a draw banner on a full board with no winner.
    ///
    /// Game status itself keeps reporting the next player.
    announce_draw: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            highlight_last_move: true,
            announce_draw: false,
        }
    }
}

/// Log filter and destination.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    filter: String,

    /// File the terminal UI logs to.
    file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            file: PathBuf::from("rewind.log"),
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if present, else
    /// defaults.
    ///
    /// An explicitly named file must exist; the default one is optional.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    info!("No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Sets whether the last-played cell is highlighted.
    pub fn with_highlight_last_move(mut self, on: bool) -> Self {
        self.display.highlight_last_move = on;
        self
    }

    /// Sets whether a draw banner is shown.
    pub fn with_announce_draw(mut self, on: bool) -> Self {
        self.display.announce_draw = on;
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(*config.display().highlight_last_move());
        assert!(!*config.display().announce_draw());
        assert_eq!(config.logging().filter(), "info");
        assert_eq!(config.logging().file(), &PathBuf::from("rewind.log"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = Config::from_toml("[display]\nannounce_draw = true\n").unwrap();
        assert!(*config.display().announce_draw());
        assert!(*config.display().highlight_last_move());
        assert_eq!(config.logging(), &LoggingConfig::default());
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let err = Config::from_toml("[display]\nsparkles = true\n").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.to_string().contains("config.rs"));
    }
}
