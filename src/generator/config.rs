//! Puzzle generator settings
//!
//! Filler letters are drawn uniformly from `filler_alphabet`; repeating a
//! letter in the alphabet weights it more heavily.

use crate::core::{MAX_PER_LETTER, POOL_SIZE, WORD_LEN};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Twenty common letters, most frequent first
pub const DEFAULT_FILLER_ALPHABET: &str = "EARIOTNSLCUDPMHGBFYW";

/// Upper bound on rejection-sampling draws per puzzle
pub const DEFAULT_MAX_DRAWS: usize = 10_000;

/// Settings for [`super::PuzzleGenerator`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// A filler draw is rejected once the pool holds this many of the letter
    pub max_per_letter: u8,
    /// Letters filler is drawn from
    pub filler_alphabet: String,
    /// Give up after this many draws
    pub max_draws: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_per_letter: MAX_PER_LETTER,
            filler_alphabet: DEFAULT_FILLER_ALPHABET.to_string(),
            max_draws: DEFAULT_MAX_DRAWS,
        }
    }
}

impl GeneratorConfig {
    /// Check the settings can produce valid pools
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when the cap is outside `1..=3`, the
    /// alphabet is empty or holds anything but `A`-`Z`, the alphabet cannot
    /// fill a pool under the cap, or `max_draws` is zero.
    ///
    /// The answer may already hold up to five of the filler letters, so the
    /// alphabet must cover a whole pool at the cap, not only the filler
    /// slots.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_PER_LETTER).contains(&self.max_per_letter) {
            return Err(Error::InvalidConfig(format!(
                "max_per_letter must be between 1 and {MAX_PER_LETTER}, got {}",
                self.max_per_letter
            )));
        }

        if self.filler_alphabet.is_empty() {
            return Err(Error::InvalidConfig(
                "filler_alphabet must not be empty".to_string(),
            ));
        }

        if let Some(bad) = self
            .filler_alphabet
            .chars()
            .find(|c| !c.is_ascii_uppercase())
        {
            return Err(Error::InvalidConfig(format!(
                "filler_alphabet may only hold letters A-Z, found '{bad}'"
            )));
        }

        let mut distinct: Vec<u8> = self.filler_alphabet.bytes().collect();
        distinct.sort_unstable();
        distinct.dedup();
        let capacity = distinct.len() * usize::from(self.max_per_letter);
        if capacity < POOL_SIZE {
            return Err(Error::InvalidConfig(format!(
                "filler_alphabet holds {} distinct letters, too few to add {} letters at {} per letter after the answer's {}",
                distinct.len(),
                POOL_SIZE - WORD_LEN,
                self.max_per_letter,
                WORD_LEN
            )));
        }

        if self.max_draws == 0 {
            return Err(Error::InvalidConfig(
                "max_draws must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Filler alphabet as bytes
    #[must_use]
    pub fn filler(&self) -> Vec<u8> {
        self.filler_alphabet.bytes().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.filler().len(), 20);
        assert_eq!(config.max_per_letter, 3);
    }

    #[test]
    fn rejects_cap_out_of_range() {
        let config = GeneratorConfig {
            max_per_letter: 4,
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = GeneratorConfig {
            max_per_letter: 0,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_bad_alphabet() {
        for alphabet in ["", "EAR1", "ear"] {
            let config = GeneratorConfig {
                filler_alphabet: alphabet.to_string(),
                ..GeneratorConfig::default()
            };
            assert!(config.validate().is_err(), "alphabet {alphabet:?}");
        }
    }

    #[test]
    fn rejects_alphabet_too_small_for_pool() {
        // Two letters at three each cannot supply seven filler letters
        let config = GeneratorConfig {
            filler_alphabet: "EEEEAAAA".to_string(),
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());

        // Nine slots cover the filler alone, but STARE takes E, A and R
        let config = GeneratorConfig {
            filler_alphabet: "EAR".to_string(),
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn smallest_accepted_alphabet_fills_any_answer() {
        let config = GeneratorConfig {
            max_per_letter: 2,
            filler_alphabet: "EARIOT".to_string(),
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_ok());

        let config = GeneratorConfig {
            filler_alphabet: "EARIOT".to_string(),
            max_per_letter: 1,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn weighted_alphabet_allows_repeats() {
        let config = GeneratorConfig {
            filler_alphabet: "EEEEARIOT".to_string(),
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn deserializes_partial_toml() {
        let config: GeneratorConfig = toml::from_str("max_per_letter = 2").unwrap();
        assert_eq!(config.max_per_letter, 2);
        assert_eq!(config.filler_alphabet, DEFAULT_FILLER_ALPHABET);
    }
}
