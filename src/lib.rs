//! Wordle Cafe
//!
//! Two word games on one shared core: the classic daily Wordle, and the cafe
//! letter puzzle where a customer builds a 5-letter word from a pool of 12
//! letters that must use the featured letter.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_cafe::core::{Color, LetterPool, Puzzle, Word};
//! use wordle_cafe::evaluator::{CafeOutcome, judge, score};
//! use wordle_cafe::wordlists::Dictionary;
//!
//! // Daily Wordle feedback
//! let feedback = score(&Word::new("allow").unwrap(), &Word::new("aloof").unwrap());
//! assert_eq!(feedback.colors()[0], Color::Green);
//!
//! // Cafe puzzle: featured letter T, answer TWINS
//! let pool = LetterPool::parse_list("T,W,N,S,I,A,W,M,N,X,R,E").unwrap();
//! let puzzle = Puzzle::new(b'T', Word::new("twins").unwrap(), pool).unwrap();
//! let dictionary: Dictionary = ["TWINS", "TRAIN"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let verdict = judge("train", &puzzle, &dictionary).unwrap();
//! assert_eq!(verdict.outcome, CafeOutcome::Lost);
//! ```

// Core domain types
pub mod core;

// Puzzle generation and rotation expansion
pub mod generator;

// Guess scoring and validation
pub mod evaluator;

// Game sessions and the cafe game service
pub mod game;

// Key/value storage behind the cafe games
pub mod store;

// Word lists and puzzle records
pub mod wordlists;

// Configuration file
pub mod config;

// Error types
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
