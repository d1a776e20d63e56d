//! Front-end configuration loaded from TOML.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "timetravel.toml";

/// Smallest supported board side.
pub const MIN_SIDE: usize = 3;

/// Largest board side that fits a regular terminal.
pub const MAX_SIDE: usize = 5;

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Cells per board row.
    #[serde(default = "default_board_side")]
    board_side: usize,

    /// Whether winning cells are drawn highlighted.
    #[serde(default = "default_true")]
    highlight_winning_line: bool,

    /// Whether move labels carry `(row, col)`.
    #[serde(default = "default_true")]
    show_positions: bool,

    /// File receiving tracing output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_board_side() -> usize {
    timetravel_tictactoe::DEFAULT_SIDE
}

fn default_true() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("timetravel_tui.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            board_side: default_board_side(),
            highlight_winning_line: default_true(),
            show_positions: default_true(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::read(path.as_ref())?.validate()
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content)?.validate()
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Resolves the configuration for a command line.
    ///
    /// An explicit `--config` must exist; otherwise [`DEFAULT_CONFIG_FILE`]
    /// is read when present. Flags override file values.
    #[instrument(skip(cli))]
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::read(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::read(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        base.with_overrides(cli).validate()
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(side) = cli.size {
            self.board_side = side;
        }
        if let Some(path) = &cli.log_file {
            self.log_file = path.clone();
        }
        if cli.no_highlight {
            self.highlight_winning_line = false;
        }
        if cli.hide_positions {
            self.show_positions = false;
        }
        self
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&self.board_side) {
            return Err(ConfigError::new(format!(
                "board_side must be between {} and {}, got {}",
                MIN_SIDE, MAX_SIDE, self.board_side
            )));
        }
        Ok(self)
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
