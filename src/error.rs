//! Crate-wide error type
//!
//! Every variant is recoverable by the caller: batch code logs and skips,
//! interactive code reports and continues.

use crate::core::{PoolError, PuzzleError, RecordError, WordError};
use std::path::PathBuf;
use thiserror::Error;

/// Result alias using the crate [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by loaders, the generator and configuration
#[derive(Debug, Error)]
pub enum Error {
    /// A word list or catalog had no usable entries
    #[error("{kind} contains no valid words")]
    EmptyWordList { kind: &'static str },

    /// Text could not be turned into a [`crate::core::Word`]
    #[error("invalid word '{text}'")]
    InvalidWord {
        text: String,
        #[source]
        source: WordError,
    },

    /// A stored puzzle record could not be parsed
    #[error("malformed puzzle record on line {line}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: RecordError,
    },

    /// A letter pool violated its invariants
    #[error(transparent)]
    Pool(#[from] PoolError),

    /// A puzzle violated its invariants
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),

    /// A file could not be read
    #[error("\"{}\" could not be read", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be written
    #[error("\"{}\" could not be written", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::AppConfig`]
    #[error("configuration could not be parsed")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration parsed but its values are unusable
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The answer uses a letter more often than the filler cap allows
    #[error("answer {answer} uses '{letter}' {count} times, more than the cap of {cap}")]
    AnswerExceedsCap {
        answer: String,
        letter: char,
        count: u8,
        cap: u8,
    },

    /// Rejection sampling ran out of draws before the pool was full
    #[error("gave up after {draws} filler draws with {len} of {size} letters placed")]
    FillerExhausted {
        draws: usize,
        len: usize,
        size: usize,
    },
}
