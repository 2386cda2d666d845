//! Game sessions
//!
//! - [`daily`]: one player's six-guess game and the answer-of-the-day schedule
//! - [`cafe`]: single-guess letter puzzle games kept in a key/value store

pub mod cafe;
pub mod daily;

pub use cafe::{CafeGames, CafeStats, GameError, GameRecord, GameStatus};
pub use daily::{DailyGame, DailyRejection, DailySchedule, DailyStatus, NotAnAnswer};
