//! Letter pool construction and valid-word enumeration

use super::config::GeneratorConfig;
use crate::core::{LetterPool, POOL_SIZE, Puzzle, WORD_LEN, Word};
use crate::error::{Error, Result};
use rand::Rng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use tracing::debug;

/// A puzzle together with every dictionary word that solves its constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    pub puzzle: Puzzle,
    /// Dictionary order; always includes the answer
    pub valid_words: Vec<Word>,
}

impl GeneratedPuzzle {
    /// Number of valid words
    #[inline]
    #[must_use]
    pub fn difficulty(&self) -> usize {
        self.valid_words.len()
    }
}

/// Builds cafe puzzles from an answer and a dictionary
#[derive(Debug, Clone, Default)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    /// Create a generator with checked settings
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] if `config` fails validation.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a puzzle for `answer`
    ///
    /// The featured letter is one of the answer's five positions picked
    /// uniformly. The pool starts as the answer's letters and is topped up to
    /// twelve with filler drawn from the configured alphabet, rejecting any
    /// letter already at the cap, then shuffled.
    ///
    /// # Errors
    /// - [`Error::EmptyWordList`] if `dictionary` is empty
    /// - [`Error::AnswerExceedsCap`] if the answer repeats a letter more than
    ///   the cap allows
    /// - [`Error::FillerExhausted`] if the draw budget runs out
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_cafe::core::Word;
    /// use wordle_cafe::generator::PuzzleGenerator;
    ///
    /// let dictionary: Vec<Word> = ["STARE", "TEARS", "RATES"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let answer = Word::new("stare").unwrap();
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let generated = PuzzleGenerator::default()
    ///     .generate(&answer, &dictionary, &mut rng)
    ///     .unwrap();
    ///
    /// assert_eq!(generated.puzzle.pool().letters().len(), 12);
    /// assert_eq!(generated.difficulty(), 3);
    /// ```
    pub fn generate<R: Rng>(
        &self,
        answer: &Word,
        dictionary: &[Word],
        rng: &mut R,
    ) -> Result<GeneratedPuzzle> {
        if dictionary.is_empty() {
            return Err(Error::EmptyWordList { kind: "dictionary" });
        }

        let cap = self.config.max_per_letter;
        let mut counts = answer.counts();
        if let Some((letter, count)) = counts.iter().find(|&(_, n)| n > cap) {
            return Err(Error::AnswerExceedsCap {
                answer: answer.text().to_string(),
                letter: char::from(letter),
                count,
                cap,
            });
        }

        let featured = answer.char_at(rng.random_range(0..WORD_LEN));

        let filler = self.config.filler();
        let mut letters = answer.chars().to_vec();
        let mut draws = 0;
        while letters.len() < POOL_SIZE {
            if draws == self.config.max_draws {
                return Err(Error::FillerExhausted {
                    draws,
                    len: letters.len(),
                    size: POOL_SIZE,
                });
            }
            draws += 1;

            let letter = filler[rng.random_range(0..filler.len())];
            if counts.get(letter) < cap {
                counts.add(letter);
                letters.push(letter);
            }
        }
        letters.shuffle(rng);

        let pool = LetterPool::new(letters)?;
        let puzzle = Puzzle::new(featured, answer.clone(), pool)?;

        let mut valid_words = valid_words(featured, puzzle.pool(), dictionary);
        if !valid_words.contains(answer) {
            valid_words.push(answer.clone());
        }

        debug!(
            answer = %answer,
            featured = %char::from(featured),
            pool = %puzzle.pool(),
            draws,
            difficulty = valid_words.len(),
            "generated puzzle"
        );

        Ok(GeneratedPuzzle {
            puzzle,
            valid_words,
        })
    }
}

/// Words of `dictionary` that contain `featured` and can be spelled from `pool`
///
/// Dictionary order is preserved.
#[must_use]
pub fn valid_words(featured: u8, pool: &LetterPool, dictionary: &[Word]) -> Vec<Word> {
    dictionary
        .par_iter()
        .filter(|word| word.has_letter(featured) && pool.can_form(word))
        .cloned()
        .collect()
}
