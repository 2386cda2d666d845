//! Cafe puzzle generation
//!
//! [`PuzzleGenerator`] builds a letter pool around an answer; [`expand_all`]
//! turns a set of puzzles into the rotation of single-answer games.

pub mod config;
mod expand;
mod generate;

pub use config::GeneratorConfig;
pub use expand::{RotationEntry, expand_all, expand_to_all_answers};
pub use generate::{GeneratedPuzzle, PuzzleGenerator, valid_words};
