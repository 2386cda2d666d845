//! Letter multisets and the feasibility check
//!
//! Pool construction, valid-word enumeration and guess validation all reduce to
//! one question: does a multiset of available letters cover the letters a word
//! needs? [`can_form`] answers it.

use std::fmt;

const ALPHABET: usize = 26;

/// Count of each uppercase letter `A`-`Z`
///
/// Bytes outside `A`-`Z` are never counted, so they are never available.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterCounts([u8; ALPHABET]);

#[inline]
fn slot(letter: u8) -> Option<usize> {
    letter
        .is_ascii_uppercase()
        .then(|| usize::from(letter - b'A'))
}

impl LetterCounts {
    /// Count the letters of a byte slice
    #[must_use]
    pub fn from_letters(letters: &[u8]) -> Self {
        let mut counts = Self::default();
        for &letter in letters {
            counts.add(letter);
        }
        counts
    }

    /// Number of copies of `letter`
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> u8 {
        slot(letter).map_or(0, |i| self.0[i])
    }

    /// Add one copy of `letter`; bytes outside `A`-`Z` are ignored
    #[inline]
    pub fn add(&mut self, letter: u8) {
        if let Some(i) = slot(letter) {
            self.0[i] = self.0[i].saturating_add(1);
        }
    }

    /// Remove one copy of `letter` if any remain; returns whether one was removed
    #[inline]
    pub fn take(&mut self, letter: u8) -> bool {
        match slot(letter) {
            Some(i) if self.0[i] > 0 => {
                self.0[i] -= 1;
                true
            }
            _ => false,
        }
    }

    /// Total number of letters counted
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&n| usize::from(n)).sum()
    }

    /// Highest count of any single letter
    #[must_use]
    pub fn max_count(&self) -> u8 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// True if every letter needed by `need` is available here
    #[inline]
    #[must_use]
    pub fn covers(&self, need: &Self) -> bool {
        self.0.iter().zip(need.0.iter()).all(|(have, want)| have >= want)
    }

    /// Iterate over `(letter, count)` for letters present at least once
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (b'A'..=b'Z')
            .zip(self.0.iter().copied())
            .filter(|&(_, count)| count > 0)
    }
}

impl fmt::Debug for LetterCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(letter, count)| (char::from(letter), count)))
            .finish()
    }
}

/// Check whether `word` can be spelled from `available`
///
/// Returns false if any letter is needed more times than it is available.
/// The empty word can always be formed.
///
/// # Examples
/// ```
/// use wordle_cafe::core::can_form;
///
/// assert!(can_form("ABBA", "AABB"));
/// assert!(!can_form("ABBA", "ABBC"));
/// ```
#[must_use]
pub fn can_form(word: impl AsRef<[u8]>, available: impl AsRef<[u8]>) -> bool {
    first_shortfall(word, available).is_none()
}

/// First letter of `word`, in word order, that `available` cannot supply
///
/// A letter is short when the word needs more copies of it than are available.
/// Bytes outside `A`-`Z` are always short.
#[must_use]
pub fn first_shortfall(word: impl AsRef<[u8]>, available: impl AsRef<[u8]>) -> Option<u8> {
    let word = word.as_ref();
    let supply = LetterCounts::from_letters(available.as_ref());
    let need = LetterCounts::from_letters(word);

    word.iter()
        .copied()
        .find(|&letter| slot(letter).is_none() || need.get(letter) > supply.get(letter))
}
