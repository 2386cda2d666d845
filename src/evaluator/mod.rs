//! Guess evaluation for both games
//!
//! - [`daily`]: green/yellow/gray feedback against a target word
//! - [`cafe`]: single-attempt validation against a letter pool

pub mod cafe;
pub mod daily;

pub use cafe::{CafeOutcome, Rejection, Verdict, judge, validate};
pub use daily::{GuessAttempt, score};
