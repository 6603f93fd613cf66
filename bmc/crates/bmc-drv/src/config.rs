//! Configuration for the bmc driver.
//!
//! Settings come from a `bmc.toml` file and are overridden by command-line
//! flags. Every field has a default, so an empty file is valid:
//!
//! ```toml
//! [lexer]
//! max_lexeme_len = 499
//!
//! [output]
//! format = "text"   # or "json"
//! color = true
//! ```

use std::path::{Path, PathBuf};

use bmc_lex::DEFAULT_MAX_LEXEME_LEN;
use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "bmc.toml";

/// Token dump format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `Token: (...)` line per token
    #[default]
    Text,
    /// A JSON array of `{kind, text, line, column}` objects
    Json,
}

/// Driver configuration as read from `bmc.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Scanner limits.
    #[serde(default)]
    pub lexer: LexerSection,

    /// Output settings.
    #[serde(default)]
    pub output: OutputSection,
}

/// The `[lexer]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexerSection {
    /// Longest lexeme accepted before reporting it as too long.
    #[serde(default = "default_max_lexeme_len")]
    pub max_lexeme_len: usize,
}

/// The `[output]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Token dump format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Whether diagnostics may use ANSI colors on a terminal.
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_max_lexeme_len() -> usize {
    DEFAULT_MAX_LEXEME_LEN
}

fn default_true() -> bool {
    true
}

impl Default for LexerSection {
    fn default() -> Self {
        Self {
            max_lexeme_len: default_max_lexeme_len(),
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/bmc/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| DriverError::Config(format!("Failed to parse configuration: {}", e)))?;

        if config.lexer.max_lexeme_len == 0 {
            return Err(DriverError::Config(
                "lexer.max_lexeme_len must be at least 1".to_string(),
            ));
        }

        Ok(config)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("bmc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("bmc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
