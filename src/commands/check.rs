//! One-shot evaluation commands: score a daily guess, check a cafe guess

use crate::core::{Feedback, Puzzle, Word};
use crate::error::{Error, Result};
use crate::evaluator::{Rejection, Verdict, judge, score};
use crate::wordlists::Dictionary;

/// Daily feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Cafe verdict for one guess against one puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub puzzle: Puzzle,
    pub verdict: std::result::Result<Verdict, Rejection>,
}

fn parse_word(text: &str) -> Result<Word> {
    Word::new(text.trim()).map_err(|source| Error::InvalidWord {
        text: text.to_string(),
        source,
    })
}

/// Score `guess` against `target`
///
/// # Errors
/// Returns [`Error::InvalidWord`] if either word is malformed.
///
/// # Examples
/// ```
/// use wordle_cafe::commands::check::score_words;
///
/// let result = score_words("bobby", "abbey").unwrap();
/// assert_eq!(result.feedback.to_string(), "Y-G-G");
/// ```
pub fn score_words(guess: &str, target: &str) -> Result<ScoreResult> {
    let guess = parse_word(guess)?;
    let target = parse_word(target)?;
    let feedback = score(&guess, &target);
    Ok(ScoreResult {
        guess,
        target,
        feedback,
    })
}

/// Check a cafe guess against a puzzle record
///
/// A rejected guess is a normal result, not an error.
///
/// # Errors
/// Returns [`Error::MalformedRecord`] if `record` does not parse.
pub fn check_guess(guess: &str, record: &str, dictionary: &Dictionary) -> Result<CheckResult> {
    let puzzle =
        Puzzle::parse_record(record).map_err(|source| Error::MalformedRecord { line: 1, source })?;
    let verdict = judge(guess, &puzzle, dictionary);
    Ok(CheckResult { puzzle, verdict })
}
