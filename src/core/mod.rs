//! Core domain types for the word games
//!
//! This module contains the fundamental domain types and performs no I/O.
//! All types here are pure, testable, and validate their invariants on
//! construction.

mod feedback;
mod letters;
mod pool;
mod puzzle;
mod word;

pub use feedback::{Color, Feedback};
pub use letters::{LetterCounts, can_form, first_shortfall};
pub use pool::{LetterPool, MAX_PER_LETTER, POOL_SIZE, PoolError};
pub use puzzle::{Puzzle, PuzzleError, RECORD_SEPARATOR, RecordError};
pub use word::{WORD_LEN, Word, WordError};
