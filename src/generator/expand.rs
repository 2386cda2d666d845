//! Puzzle expansion
//!
//! A generated pool usually admits several catalog answers. Expanding a base
//! puzzle yields one single-answer puzzle per admissible answer, all sharing
//! the featured letter and pool; the concatenation over every base puzzle is
//! the cafe game rotation.

use crate::core::{Puzzle, Word};
use rayon::prelude::*;
use tracing::{info, warn};

/// One expanded puzzle and where it sits in the rotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationEntry {
    pub puzzle: Puzzle,
    /// 1-based index of the base puzzle
    pub puzzle_number: usize,
    /// 1-based index of this answer among the base puzzle's answers
    pub answer_number: usize,
    /// Number of answers the base puzzle expanded to
    pub total_answers: usize,
    /// Answer of the base puzzle
    pub original_answer: Word,
}

/// Every catalog answer admissible under `base`'s featured letter and pool
///
/// Results follow catalog order. The base answer appears only if it is in the
/// catalog.
///
/// # Examples
/// ```
/// use wordle_cafe::core::{Puzzle, Word};
/// use wordle_cafe::generator::expand_to_all_answers;
///
/// let base = Puzzle::parse_record("T|STARE|T,W,N,S,I,A,W,M,N,X,R,E").unwrap();
/// let catalog: Vec<Word> = ["STARE", "TEARS", "HOUSE"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let expanded = expand_to_all_answers(&base, &catalog);
/// assert_eq!(expanded.len(), 2);
/// assert_eq!(expanded[1].answer().text(), "TEARS");
/// ```
#[must_use]
pub fn expand_to_all_answers(base: &Puzzle, catalog: &[Word]) -> Vec<Puzzle> {
    let featured = base.featured();
    let pool = base.pool();

    catalog
        .par_iter()
        .filter(|answer| answer.has_letter(featured) && pool.can_form(answer))
        .map(|answer| base.with_answer(answer.clone()))
        .collect()
}

/// Expand every base puzzle, numbering the results
///
/// Entries come in base order, then catalog order within each base.
#[must_use]
pub fn expand_all(bases: &[Puzzle], catalog: &[Word]) -> Vec<RotationEntry> {
    let per_base: Vec<Vec<RotationEntry>> = bases
        .par_iter()
        .enumerate()
        .map(|(index, base)| {
            let expanded = expand_to_all_answers(base, catalog);
            if expanded.is_empty() {
                warn!(
                    puzzle = index + 1,
                    answer = %base.answer(),
                    "puzzle admits no catalog answers"
                );
            }

            let total_answers = expanded.len();
            expanded
                .into_iter()
                .enumerate()
                .map(|(answer_index, puzzle)| RotationEntry {
                    puzzle,
                    puzzle_number: index + 1,
                    answer_number: answer_index + 1,
                    total_answers,
                    original_answer: base.answer().clone(),
                })
                .collect()
        })
        .collect();

    let rotation: Vec<RotationEntry> = per_base.into_iter().flatten().collect();
    info!(
        base_puzzles = bases.len(),
        games = rotation.len(),
        "expanded puzzles into rotation"
    );
    rotation
}
