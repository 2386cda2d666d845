//! The 12-letter budget a cafe puzzle answer must be spelled from

use super::letters::{LetterCounts, first_shortfall};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of letters in every pool
pub const POOL_SIZE: usize = 12;

/// Most copies of one letter a pool may hold
pub const MAX_PER_LETTER: u8 = 3;

/// Error type for invalid letter pools
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("letter pool must hold exactly 12 letters, got {0}")]
    WrongSize(usize),
    #[error("letter pool entry '{0}' is not a single letter A-Z")]
    InvalidLetter(String),
    #[error("letter pool holds '{letter}' {count} times, at most 3 allowed")]
    OverCap { letter: char, count: u8 },
}

/// An ordered multiset of exactly [`POOL_SIZE`] uppercase letters
///
/// Order carries no meaning for feasibility; it is kept so a shuffled pool is
/// shown to players the way it was generated.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<char>", into = "Vec<char>")]
pub struct LetterPool {
    letters: Vec<u8>,
    counts: LetterCounts,
}

impl LetterPool {
    /// Build a pool, checking size, alphabet and the per-letter cap
    ///
    /// Lowercase letters are accepted and normalized.
    ///
    /// # Errors
    /// Returns `PoolError` when the pool is not 12 letters `A`-`Z` or a letter
    /// appears more than [`MAX_PER_LETTER`] times.
    pub fn new(letters: impl Into<Vec<u8>>) -> Result<Self, PoolError> {
        let mut letters = letters.into();
        letters.make_ascii_uppercase();

        if letters.len() != POOL_SIZE {
            return Err(PoolError::WrongSize(letters.len()));
        }

        if let Some(&bad) = letters.iter().find(|b| !b.is_ascii_uppercase()) {
            return Err(PoolError::InvalidLetter(char::from(bad).to_string()));
        }

        let counts = LetterCounts::from_letters(&letters);
        if let Some((letter, count)) = counts.iter().find(|&(_, n)| n > MAX_PER_LETTER) {
            return Err(PoolError::OverCap {
                letter: char::from(letter),
                count,
            });
        }

        Ok(Self { letters, counts })
    }

    /// Parse a comma-separated list such as `"T,W,N,S,I,A,W,M,N,X,R,E"`
    ///
    /// Entries are trimmed and uppercased.
    ///
    /// # Errors
    /// Returns `PoolError::InvalidLetter` for any entry that is not exactly one
    /// letter, then the checks of [`LetterPool::new`].
    pub fn parse_list(list: &str) -> Result<Self, PoolError> {
        let letters = list
            .split(',')
            .map(|entry| {
                let entry = entry.trim();
                match entry.as_bytes() {
                    [letter] if letter.is_ascii_alphabetic() => Ok(letter.to_ascii_uppercase()),
                    _ => Err(PoolError::InvalidLetter(entry.to_string())),
                }
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Self::new(letters)
    }

    /// The letters in pool order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Letter multiset of the pool
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &LetterCounts {
        &self.counts
    }

    /// Number of copies of `letter` in the pool
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u8 {
        self.counts.get(letter)
    }

    /// Check if the pool holds at least one `letter`
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.count(letter) > 0
    }

    /// Check whether `word` can be spelled from this pool
    #[inline]
    #[must_use]
    pub fn can_form(&self, word: impl AsRef<[u8]>) -> bool {
        self.counts.covers(&LetterCounts::from_letters(word.as_ref()))
            && word.as_ref().iter().all(u8::is_ascii_uppercase)
    }

    /// First letter of `word` the pool cannot supply
    #[must_use]
    pub fn first_shortfall(&self, word: impl AsRef<[u8]>) -> Option<u8> {
        first_shortfall(word, &self.letters)
    }
}

impl TryFrom<Vec<char>> for LetterPool {
    type Error = PoolError;

    fn try_from(chars: Vec<char>) -> Result<Self, Self::Error> {
        let letters = chars
            .into_iter()
            .map(|c| {
                u8::try_from(c)
                    .ok()
                    .filter(u8::is_ascii_alphabetic)
                    .ok_or_else(|| PoolError::InvalidLetter(c.to_string()))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Self::new(letters)
    }
}

impl From<LetterPool> for Vec<char> {
    fn from(pool: LetterPool) -> Self {
        pool.letters.into_iter().map(char::from).collect()
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &letter) in self.letters.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

impl fmt::Debug for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LetterPool({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_valid() {
        let pool = LetterPool::new(*b"TWNSIAWMNXRE").unwrap();
        assert_eq!(pool.letters(), b"TWNSIAWMNXRE");
        assert_eq!(pool.count(b'W'), 2);
        assert!(pool.contains(b'X'));
        assert!(!pool.contains(b'Z'));
    }

    #[test]
    fn pool_lowercase_normalized() {
        let pool = LetterPool::new(*b"twnsiawmnxre").unwrap();
        assert_eq!(pool.letters(), b"TWNSIAWMNXRE");
    }

    #[test]
    fn pool_wrong_size() {
        assert_eq!(
            LetterPool::new(*b"ABCDE"),
            Err(PoolError::WrongSize(5))
        );
        assert_eq!(
            LetterPool::new(*b"ABCDEFGHIJKLM"),
            Err(PoolError::WrongSize(13))
        );
    }

    #[test]
    fn pool_over_cap() {
        assert_eq!(
            LetterPool::new(*b"AAAABCDEFGHI"),
            Err(PoolError::OverCap {
                letter: 'A',
                count: 4
            })
        );
        assert!(LetterPool::new(*b"AAABBBCCCDDD").is_ok());
    }

    #[test]
    fn pool_invalid_letter() {
        assert_eq!(
            LetterPool::new(*b"ABCDEFGHIJK1"),
            Err(PoolError::InvalidLetter("1".to_string()))
        );
    }

    #[test]
    fn parse_list_trims_and_uppercases() {
        let pool = LetterPool::parse_list("h, o,u ,s,b,l,m,k,p,e,d,r").unwrap();
        assert_eq!(pool.to_string(), "H,O,U,S,B,L,M,K,P,E,D,R");
    }

    #[test]
    fn parse_list_rejects_multi_letter_entries() {
        assert_eq!(
            LetterPool::parse_list("HO,U,S,B,L,M,K,P,E,D,R,T"),
            Err(PoolError::InvalidLetter("HO".to_string()))
        );
        assert_eq!(
            LetterPool::parse_list("H,O,U"),
            Err(PoolError::WrongSize(3))
        );
    }

    #[test]
    fn pool_can_form() {
        let pool = LetterPool::new(*b"HOUSBLMKPEDR").unwrap();
        assert!(pool.can_form("HOUSE"));
        assert!(pool.can_form("HORSE"));
        assert!(!pool.can_form("HELLO"));
        assert_eq!(pool.first_shortfall("HELLO"), Some(b'L'));
    }

    #[test]
    fn pool_serde_as_letter_list() {
        let pool = LetterPool::new(*b"MAGICWNLKPFT").unwrap();
        let json = serde_json::to_string(&pool).unwrap();
        assert_eq!(
            json,
            r#"["M","A","G","I","C","W","N","L","K","P","F","T"]"#
        );
        let back: LetterPool = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pool);
    }
}
