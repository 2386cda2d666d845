//! Cafe letter puzzles and their record format
//!
//! A puzzle is stored as one line, `FEATURED_LETTER|ANSWER|L1,L2,...,L12`:
//!
//! ```text
//! T|STARE|T,W,N,S,I,A,W,M,N,X,R,E
//! ```

use super::pool::{LetterPool, PoolError};
use super::word::{Word, WordError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Field separator of a puzzle record
pub const RECORD_SEPARATOR: char = '|';

/// A puzzle whose parts contradict each other
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("featured letter '{featured}' does not occur in answer {answer}")]
    FeaturedNotInAnswer { featured: char, answer: String },
    #[error("letter pool cannot spell answer {answer}: not enough '{letter}'")]
    AnswerNotInPool { answer: String, letter: char },
}

/// Why a record line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected 3 '|'-separated fields, found {0}")]
    FieldCount(usize),
    #[error("featured letter '{0}' is not a single letter")]
    InvalidFeatured(String),
    #[error("answer '{text}' is not a valid word")]
    InvalidAnswer {
        text: String,
        #[source]
        source: WordError,
    },
    #[error(transparent)]
    InvalidPool(#[from] PoolError),
    #[error(transparent)]
    Inconsistent(#[from] PuzzleError),
}

/// An immutable cafe puzzle: featured letter, answer and letter pool
///
/// Invariants: the featured letter occurs in the answer, and the pool can
/// spell the answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Puzzle {
    featured: u8,
    answer: Word,
    pool: LetterPool,
}

impl Puzzle {
    /// Assemble a puzzle, checking its invariants
    ///
    /// # Errors
    /// Returns `PuzzleError` when the featured letter is not in the answer or
    /// the pool cannot spell the answer.
    pub fn new(featured: u8, answer: Word, pool: LetterPool) -> Result<Self, PuzzleError> {
        let featured = featured.to_ascii_uppercase();

        if !answer.has_letter(featured) {
            return Err(PuzzleError::FeaturedNotInAnswer {
                featured: char::from(featured),
                answer: answer.text().to_string(),
            });
        }

        if let Some(letter) = pool.first_shortfall(answer.chars()) {
            return Err(PuzzleError::AnswerNotInPool {
                answer: answer.text().to_string(),
                letter: char::from(letter),
            });
        }

        Ok(Self {
            featured,
            answer,
            pool,
        })
    }

    /// Same featured letter and pool, different answer
    ///
    /// Callers guarantee `answer` contains the featured letter and fits the pool.
    pub(crate) fn with_answer(&self, answer: Word) -> Self {
        debug_assert!(answer.has_letter(self.featured));
        debug_assert!(self.pool.can_form(answer.chars()));

        Self {
            featured: self.featured,
            answer,
            pool: self.pool.clone(),
        }
    }

    /// Parse one record line
    ///
    /// Fields are trimmed and uppercased.
    ///
    /// # Errors
    /// Returns `RecordError` for a wrong field count, a featured field that is
    /// not one letter, an invalid answer or pool, or an inconsistent puzzle.
    ///
    /// # Examples
    /// ```
    /// use wordle_cafe::core::Puzzle;
    ///
    /// let puzzle = Puzzle::parse_record("T|STARE|T,W,N,S,I,A,W,M,N,X,R,E").unwrap();
    /// assert_eq!(puzzle.featured(), b'T');
    /// assert_eq!(puzzle.answer().text(), "STARE");
    /// ```
    pub fn parse_record(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.trim().split(RECORD_SEPARATOR).collect();
        let [featured, answer, pool] = fields.as_slice() else {
            return Err(RecordError::FieldCount(fields.len()));
        };

        let featured = featured.trim();
        let featured = match featured.as_bytes() {
            [letter] if letter.is_ascii_alphabetic() => letter.to_ascii_uppercase(),
            _ => return Err(RecordError::InvalidFeatured(featured.to_string())),
        };

        let answer_text = answer.trim();
        let answer = Word::new(answer_text).map_err(|source| RecordError::InvalidAnswer {
            text: answer_text.to_string(),
            source,
        })?;

        let pool = LetterPool::parse_list(pool)?;

        Ok(Self::new(featured, answer, pool)?)
    }

    /// Format as a record line
    #[must_use]
    pub fn to_record(&self) -> String {
        self.to_string()
    }

    /// The letter every accepted guess must contain
    #[inline]
    #[must_use]
    pub const fn featured(&self) -> u8 {
        self.featured
    }

    /// The winning word
    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    /// The letters guesses are spelled from
    #[inline]
    #[must_use]
    pub const fn pool(&self) -> &LetterPool {
        &self.pool
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}",
            char::from(self.featured),
            self.answer,
            self.pool
        )
    }
}

impl FromStr for Puzzle {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_record(s)
    }
}

impl TryFrom<String> for Puzzle {
    type Error = RecordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_record(&value)
    }
}

impl From<Puzzle> for String {
    fn from(puzzle: Puzzle) -> Self {
        puzzle.to_record()
    }
}
