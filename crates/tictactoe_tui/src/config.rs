//! Front-end configuration loaded from TOML.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is named.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Configuration for the terminal front-end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct TuiConfig {
    /// File the tracing subscriber writes to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Color of X markers (name or `#rrggbb`).
    #[serde(default = "default_x_color")]
    x_color: String,

    /// Color of O markers (name or `#rrggbb`).
    #[serde(default = "default_o_color")]
    o_color: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_x_color() -> String {
    "blue".to_string()
}

fn default_o_color() -> String {
    "red".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            x_color: default_x_color(),
            o_color: default_o_color(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!("Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configuration for a run.
    ///
    /// A path given on the command line must exist. Without one,
    /// [`DEFAULT_CONFIG_PATH`] is used if present and the built-in defaults
    /// otherwise. Command-line flags win over file values.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH)?,
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };
        Ok(config.with_cli_overrides(cli))
    }

    /// Applies the command-line overrides.
    pub fn with_cli_overrides(self, cli: &Cli) -> Self {
        let config = match &cli.log_file {
            Some(path) => self.with_log_file(path.clone()),
            None => self,
        };
        match &cli.log_filter {
            Some(filter) => config.with_log_filter(filter.clone()),
            None => config,
        }
    }

    /// Parses the configured marker colors.
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Ok(Theme {
            x: parse_color("x_color", &self.x_color)?,
            o: parse_color("o_color", &self.o_color)?,
        })
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::new(format!("Invalid color for {}: {:?}", key, value)))
}

/// Marker colors used when drawing the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Theme {
    /// Color of X markers.
    x: Color,
    /// Color of O markers.
    o: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
