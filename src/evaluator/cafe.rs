//! Cafe game guess validation
//!
//! A cafe guess must be five letters, use the featured letter, be a
//! dictionary word and be spellable from the pool. Checks run in that order
//! and the first failure is reported.

use crate::core::{LetterPool, Puzzle, WORD_LEN, Word};
use crate::wordlists::Dictionary;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a cafe guess was refused
///
/// The display text is shown to the player as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Word must be 5 letters long")]
    WrongLength,
    #[error("You must use the featured letter '{0}'")]
    MissingFeatured(char),
    #[error("Not a valid word")]
    NotAWord,
    #[error("Not enough '{0}' letters available")]
    InsufficientLetters(char),
}

/// Result of an accepted cafe guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CafeOutcome {
    Won,
    Lost,
}

/// An accepted guess and its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub guess: Word,
    pub outcome: CafeOutcome,
}

/// Check a raw guess against a pool and featured letter
///
/// The guess is trimmed and uppercased first. On success the normalized word
/// is returned. Validation is pure: the same input always gives the same
/// result.
///
/// # Errors
/// Returns the first [`Rejection`] that applies.
///
/// # Examples
/// ```
/// use wordle_cafe::core::LetterPool;
/// use wordle_cafe::evaluator::{Rejection, validate};
/// use wordle_cafe::wordlists::Dictionary;
///
/// let pool = LetterPool::parse_list("T,W,N,S,I,A,W,M,N,X,R,E").unwrap();
/// let dictionary: Dictionary = ["STARE", "TEARS", "SWAIN"]
///     .iter()
///     .map(|w| w.parse().unwrap())
///     .collect();
///
/// assert!(validate(" tears ", &pool, b'T', &dictionary).is_ok());
/// assert_eq!(
///     validate("SWAIN", &pool, b'T', &dictionary),
///     Err(Rejection::MissingFeatured('T'))
/// );
/// ```
pub fn validate(
    guess: &str,
    pool: &LetterPool,
    featured: u8,
    dictionary: &Dictionary,
) -> Result<Word, Rejection> {
    let normalized = guess.trim().to_uppercase();
    if normalized.chars().count() != WORD_LEN {
        return Err(Rejection::WrongLength);
    }

    let featured = featured.to_ascii_uppercase();
    if !normalized.as_bytes().contains(&featured) {
        return Err(Rejection::MissingFeatured(char::from(featured)));
    }

    let word = Word::new(normalized).map_err(|_| Rejection::NotAWord)?;
    if !dictionary.contains(&word) {
        return Err(Rejection::NotAWord);
    }

    if let Some(letter) = pool.first_shortfall(&word) {
        return Err(Rejection::InsufficientLetters(char::from(letter)));
    }

    Ok(word)
}

/// Validate a guess against a puzzle and decide the game
///
/// An accepted guess wins only if it equals the answer. Callers enforce that
/// each game gets a single accepted guess.
///
/// # Errors
/// Returns the [`Rejection`] from [`validate`]; a rejected guess decides
/// nothing.
pub fn judge(guess: &str, puzzle: &Puzzle, dictionary: &Dictionary) -> Result<Verdict, Rejection> {
    let guess = validate(guess, puzzle.pool(), puzzle.featured(), dictionary)?;
    let outcome = if &guess == puzzle.answer() {
        CafeOutcome::Won
    } else {
        CafeOutcome::Lost
    };
    Ok(Verdict { guess, outcome })
}
