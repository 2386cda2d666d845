//! Application configuration
//!
//! Read from an optional TOML file; every field has a default, so an empty
//! file is a valid configuration. Command-line flags override the file.
//!
//! ```toml
//! [generator]
//! max_per_letter = 3
//! filler_alphabet = "EARIOTNSLCUDPMHGBFYW"
//! max_draws = 10000
//!
//! [daily]
//! start_date = "2025-01-01"
//! max_attempts = 6
//!
//! [wordlists]
//! dictionary = "data/words.txt"
//! answers = "data/answers.txt"
//! puzzles = "data/letter_puzzles.txt"
//! ```

use crate::error::{Error, Result};
use crate::game::daily::{DEFAULT_MAX_ATTEMPTS, MAX_ATTEMPTS_LIMIT, default_start_date};
use crate::generator::GeneratorConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub generator: GeneratorConfig,
    pub daily: DailyConfig,
    pub wordlists: WordlistConfig,
}

/// Daily game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DailyConfig {
    /// First day of the answer rotation, `YYYY-MM-DD`
    pub start_date: NaiveDate,
    pub max_attempts: usize,
}

impl Default for DailyConfig {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Word list files; unset entries use the lists built into the binary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WordlistConfig {
    pub dictionary: Option<PathBuf>,
    pub answers: Option<PathBuf>,
    pub puzzles: Option<PathBuf>,
}

impl AppConfig {
    /// Parse and validate TOML text
    ///
    /// # Errors
    /// Returns [`Error::ConfigParse`] for invalid TOML or unknown keys, and
    /// [`Error::InvalidConfig`] for unusable values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    ///
    /// # Errors
    /// Returns [`Error::Read`] if the file cannot be read, otherwise as
    /// [`AppConfig::from_toml_str`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Check every section
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        self.generator.validate()?;
        if !(1..=MAX_ATTEMPTS_LIMIT).contains(&self.daily.max_attempts) {
            return Err(Error::InvalidConfig(format!(
                "daily.max_attempts must be between 1 and {MAX_ATTEMPTS_LIMIT}, got {}",
                self.daily.max_attempts
            )));
        }
        Ok(())
    }
}
