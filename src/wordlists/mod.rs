//! Word lists for the games
//!
//! A [`Lexicon`] pairs the guess [`Dictionary`] with the answer catalog. The
//! embedded lists are compiled into the binary; [`loader`] reads replacements
//! from disk.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, PUZZLE_RECORDS, WORDS, WORDS_COUNT};

use crate::core::Word;
use crate::error::{Error, Result};
use rustc_hash::FxHashSet;
use tracing::warn;

/// Every acceptable guess, in load order, with constant-time membership
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary; duplicates keep their first position
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut dictionary = Self::default();
        for word in words {
            dictionary.insert(word);
        }
        dictionary
    }

    /// Add a word; returns false if it was already present
    pub fn insert(&mut self, word: Word) -> bool {
        if self.index.contains(&word) {
            return false;
        }
        self.index.insert(word.clone());
        self.words.push(word);
        true
    }

    /// Check whether `word` is an acceptable guess
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Guess dictionary plus answer catalog
///
/// Every answer is also a dictionary word: answers missing from the
/// dictionary are added to it when the lexicon is built.
#[derive(Debug, Clone)]
pub struct Lexicon {
    dictionary: Dictionary,
    answers: Vec<Word>,
}

impl Lexicon {
    /// Build a lexicon from a guess list and an answer catalog
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyWordList`] if either list is empty.
    pub fn new(guesses: Vec<Word>, answers: Vec<Word>) -> Result<Self> {
        if guesses.is_empty() {
            return Err(Error::EmptyWordList { kind: "dictionary" });
        }
        if answers.is_empty() {
            return Err(Error::EmptyWordList {
                kind: "answer catalog",
            });
        }

        let mut dictionary = Dictionary::new(guesses);
        let added = answers
            .iter()
            .filter(|&answer| dictionary.insert(answer.clone()))
            .count();
        if added > 0 {
            warn!(added, "answers missing from the dictionary were added to it");
        }

        Ok(Self {
            dictionary,
            answers,
        })
    }

    /// Lexicon built from the lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyWordList`] if the embedded data is empty.
    pub fn embedded() -> Result<Self> {
        Self::new(
            loader::words_from_slice(WORDS),
            loader::words_from_slice(ANSWERS),
        )
    }

    /// The guess dictionary
    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The answer catalog
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Puzzle;

    fn words(list: &[&str]) -> Vec<Word> {
        loader::words_from_slice(list)
    }

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS.iter().chain(ANSWERS) {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not valid");
            assert!(
                word.bytes().all(|b| b.is_ascii_uppercase()),
                "Word '{word}' is not uppercase"
            );
        }
    }

    #[test]
    fn embedded_answers_subset_of_words() {
        let dictionary: Dictionary = words(WORDS).into_iter().collect();

        for &answer in ANSWERS {
            assert!(
                dictionary.contains(&Word::new(answer).unwrap()),
                "Answer '{answer}' not in dictionary"
            );
        }
    }

    #[test]
    fn embedded_puzzles_parse() {
        let load = loader::puzzles_from_text(PUZZLE_RECORDS);
        assert!(!load.puzzles.is_empty());
        assert_eq!(load.skipped, 0);

        let first: &Puzzle = &load.puzzles[0];
        assert_eq!(first.answer().text(), "STARE");
    }

    #[test]
    fn dictionary_dedupes_in_order() {
        let dictionary = Dictionary::new(words(&["crane", "slate", "CRANE"]));
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.words()[0].text(), "CRANE");
        assert!(dictionary.contains(&Word::new("slate").unwrap()));
        assert!(!dictionary.contains(&Word::new("irate").unwrap()));
    }

    #[test]
    fn lexicon_adds_missing_answers() {
        let lexicon = Lexicon::new(words(&["crane"]), words(&["latte"])).unwrap();
        assert!(lexicon.dictionary().contains(&Word::new("LATTE").unwrap()));
        assert_eq!(lexicon.dictionary().len(), 2);
        assert_eq!(lexicon.answers().len(), 1);
    }

    #[test]
    fn lexicon_rejects_empty_lists() {
        assert!(matches!(
            Lexicon::new(Vec::new(), words(&["latte"])),
            Err(Error::EmptyWordList { kind: "dictionary" })
        ));
        assert!(matches!(
            Lexicon::new(words(&["latte"]), Vec::new()),
            Err(Error::EmptyWordList { .. })
        ));
    }

    #[test]
    fn embedded_lexicon_loads() {
        let lexicon = Lexicon::embedded().unwrap();
        assert_eq!(lexicon.answers().len(), ANSWERS_COUNT);
        assert!(lexicon.dictionary().len() >= WORDS_COUNT);
    }
}
