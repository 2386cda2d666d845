//! Rotation breakdown
//!
//! Expands the base puzzles against the answer catalog and summarizes how
//! many games each one contributes.

use crate::core::{Puzzle, Word};
use crate::generator::{RotationEntry, expand_all};

/// Games contributed by one base puzzle
#[derive(Debug, Clone)]
pub struct PuzzleBreakdown {
    pub puzzle_number: usize,
    pub featured: char,
    pub original_answer: Word,
    pub answers: Vec<Word>,
}

/// Full rotation plus its per-puzzle breakdown
#[derive(Debug)]
pub struct ExpandSummary {
    pub rotation: Vec<RotationEntry>,
    pub breakdown: Vec<PuzzleBreakdown>,
}

impl ExpandSummary {
    #[must_use]
    pub fn total_games(&self) -> usize {
        self.rotation.len()
    }
}

/// Expand `bases` against `catalog`
///
/// Base puzzles that admit no answer still get a (empty) breakdown row.
#[must_use]
pub fn run_expand(bases: &[Puzzle], catalog: &[Word]) -> ExpandSummary {
    let rotation = expand_all(bases, catalog);

    let mut breakdown: Vec<PuzzleBreakdown> = bases
        .iter()
        .enumerate()
        .map(|(i, base)| PuzzleBreakdown {
            puzzle_number: i + 1,
            featured: char::from(base.featured()),
            original_answer: base.answer().clone(),
            answers: Vec::new(),
        })
        .collect();

    for entry in &rotation {
        if let Some(row) = breakdown.get_mut(entry.puzzle_number - 1) {
            row.answers.push(entry.puzzle.answer().clone());
        }
    }

    ExpandSummary {
        rotation,
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_matches_rotation() {
        let bases = vec![
            Puzzle::parse_record("T|STARE|T,W,N,S,I,A,W,M,N,X,R,E").unwrap(),
            Puzzle::parse_record("M|MAGIC|M,A,G,I,C,W,N,L,K,P,F,T").unwrap(),
        ];
        let catalog: Vec<Word> = ["STARE", "TEARS", "HOUSE"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();

        let summary = run_expand(&bases, &catalog);
        assert_eq!(summary.total_games(), 2);
        assert_eq!(summary.breakdown.len(), 2);
        assert_eq!(summary.breakdown[0].answers.len(), 2);
        assert_eq!(summary.breakdown[0].featured, 'T');
        assert!(summary.breakdown[1].answers.is_empty());
        assert_eq!(summary.breakdown[1].original_answer.text(), "MAGIC");
    }
}
