//! Cafe game service
//!
//! Each game is one puzzle from the rotation, stored as JSON under
//! `GAME_<uuid>`. A game accepts exactly one valid guess. Every state change
//! goes through the store's compare-and-swap, so concurrent requests for the
//! same game or the rotation counter cannot overwrite each other.

use crate::core::{Puzzle, Word};
use crate::evaluator::{CafeOutcome, Rejection, judge};
use crate::generator::RotationEntry;
use crate::store::{KeyValueStore, StoreError};
use crate::wordlists::Dictionary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Key of the number of games created so far
pub const ROTATION_INDEX_KEY: &str = "ROTATION_INDEX";

/// Key of the number of games won
pub const WINNERS_KEY: &str = "WINNERS";

/// Store key for a game record
#[must_use]
pub fn game_key(id: Uuid) -> String {
    format!("GAME_{id}")
}

/// Lifecycle of a cafe game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

impl From<CafeOutcome> for GameStatus {
    fn from(outcome: CafeOutcome) -> Self {
        match outcome {
            CafeOutcome::Won => Self::Won,
            CafeOutcome::Lost => Self::Lost,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// One cafe game as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: Uuid,
    pub puzzle: Puzzle,
    pub puzzle_number: usize,
    pub answer_number: usize,
    pub total_answers: usize,
    pub status: GameStatus,
    pub guess: Option<Word>,
    pub accessed: bool,
    pub created_at: DateTime<Utc>,
    /// 1-based position in the sequence of created games
    pub sequence: u64,
}

impl GameRecord {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }
}

/// Errors from the cafe game service
#[derive(Debug, Error)]
pub enum GameError {
    #[error("no puzzles in the rotation")]
    EmptyRotation,
    #[error("game {0} not found")]
    NotFound(Uuid),
    #[error("game {id} is already {status}")]
    Completed { id: Uuid, status: GameStatus },
    #[error(transparent)]
    Rejected(#[from] Rejection),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("game record could not be encoded or decoded")]
    Codec(#[from] serde_json::Error),
    #[error("counter {0} does not hold a number")]
    CorruptCounter(String),
}

/// Counters for the admin view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CafeStats {
    pub games_created: u64,
    pub games_won: u64,
    pub rotation_len: usize,
}

/// Creates cafe games and accepts their guesses
pub struct CafeGames<'a, S> {
    store: S,
    rotation: Vec<RotationEntry>,
    dictionary: &'a Dictionary,
}

impl<'a, S: KeyValueStore> CafeGames<'a, S> {
    /// Service over `store`, handing out `rotation` in order
    ///
    /// # Errors
    /// Returns [`GameError::EmptyRotation`] if `rotation` is empty.
    pub fn new(
        store: S,
        rotation: Vec<RotationEntry>,
        dictionary: &'a Dictionary,
    ) -> Result<Self, GameError> {
        if rotation.is_empty() {
            return Err(GameError::EmptyRotation);
        }
        Ok(Self {
            store,
            rotation,
            dictionary,
        })
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn rotation(&self) -> &[RotationEntry] {
        &self.rotation
    }

    /// Create the next game in the rotation
    ///
    /// # Errors
    /// Returns [`GameError`] if the store fails or holds a corrupt counter.
    pub fn create_game(&self) -> Result<GameRecord, GameError> {
        let sequence = self.increment_counter(ROTATION_INDEX_KEY)?;
        let entry = &self.rotation[self.slot(sequence - 1)];

        let record = GameRecord {
            id: Uuid::new_v4(),
            puzzle: entry.puzzle.clone(),
            puzzle_number: entry.puzzle_number,
            answer_number: entry.answer_number,
            total_answers: entry.total_answers,
            status: GameStatus::Active,
            guess: None,
            accessed: false,
            created_at: Utc::now(),
            sequence,
        };

        let json = serde_json::to_string(&record)?;
        self.store.set(&game_key(record.id), &json)?;

        info!(
            game = %record.id,
            sequence,
            puzzle = entry.puzzle_number,
            answer_number = entry.answer_number,
            "created game"
        );
        Ok(record)
    }

    /// Load a game without changing it
    ///
    /// # Errors
    /// Returns [`GameError::NotFound`] for an unknown id.
    pub fn game(&self, id: Uuid) -> Result<GameRecord, GameError> {
        self.load(id).map(|(record, _)| record)
    }

    /// A player opens the game page
    ///
    /// Marks the game accessed on the first visit.
    ///
    /// # Errors
    /// Returns [`GameError::Completed`] once the game has been played, or
    /// [`GameError::NotFound`] for an unknown id.
    pub fn open_game(&self, id: Uuid) -> Result<GameRecord, GameError> {
        let (record, _) = self.load(id)?;
        if !record.is_active() {
            return Err(GameError::Completed {
                id,
                status: record.status,
            });
        }
        if record.accessed {
            return Ok(record);
        }

        let record = self.update(id, |record| {
            if !record.is_active() {
                return Err(GameError::Completed {
                    id,
                    status: record.status,
                });
            }
            record.accessed = true;
            Ok(())
        })?;
        debug!(game = %id, "game opened for the first time");
        Ok(record)
    }

    /// Whether a player has opened or played the game
    ///
    /// # Errors
    /// Returns [`GameError::NotFound`] for an unknown id.
    pub fn was_accessed(&self, id: Uuid) -> Result<bool, GameError> {
        let record = self.game(id)?;
        Ok(record.accessed || record.guess.is_some())
    }

    /// Submit the single guess for a game
    ///
    /// A rejected guess leaves the game active and untouched. An accepted
    /// guess moves the game to `Won` or `Lost`; of two concurrent accepted
    /// guesses only one succeeds.
    ///
    /// # Errors
    /// - [`GameError::Rejected`] if the guess fails validation
    /// - [`GameError::Completed`] if the game already has a guess
    /// - [`GameError::NotFound`] for an unknown id
    pub fn submit_guess(&self, id: Uuid, raw: &str) -> Result<GameRecord, GameError> {
        let (record, _) = self.load(id)?;
        if !record.is_active() {
            return Err(GameError::Completed {
                id,
                status: record.status,
            });
        }

        let verdict = judge(raw, &record.puzzle, self.dictionary)?;
        let status = GameStatus::from(verdict.outcome);

        let record = self.update(id, |record| {
            if !record.is_active() {
                return Err(GameError::Completed {
                    id,
                    status: record.status,
                });
            }
            record.status = status;
            record.guess = Some(verdict.guess.clone());
            Ok(())
        })?;

        // The guess is already stored, so a failed count only logs
        if status == GameStatus::Won {
            if let Err(err) = self.increment_counter(WINNERS_KEY) {
                warn!(game = %id, error = %err, "could not count the win");
            }
        }
        info!(game = %id, guess = %verdict.guess, %status, "guess accepted");
        Ok(record)
    }

    /// Game counters
    ///
    /// # Errors
    /// Returns [`GameError`] if the store fails or holds a corrupt counter.
    pub fn stats(&self) -> Result<CafeStats, GameError> {
        Ok(CafeStats {
            games_created: self.counter(ROTATION_INDEX_KEY)?,
            games_won: self.counter(WINNERS_KEY)?,
            rotation_len: self.rotation.len(),
        })
    }

    /// The next `count` rotation entries that new games will get
    ///
    /// # Errors
    /// Returns [`GameError`] if the store fails or holds a corrupt counter.
    pub fn upcoming(&self, count: usize) -> Result<Vec<&RotationEntry>, GameError> {
        let created = self.counter(ROTATION_INDEX_KEY)?;
        Ok((0..count as u64)
            .map(|offset| &self.rotation[self.slot(created + offset)])
            .collect())
    }

    fn slot(&self, index: u64) -> usize {
        (index % self.rotation.len() as u64) as usize
    }

    fn load(&self, id: Uuid) -> Result<(GameRecord, String), GameError> {
        let raw = self
            .store
            .get(&game_key(id))?
            .ok_or(GameError::NotFound(id))?;
        let record = serde_json::from_str(&raw)?;
        Ok((record, raw))
    }

    /// Apply `change` to a game and write it back, retrying on conflict
    fn update<F>(&self, id: Uuid, mut change: F) -> Result<GameRecord, GameError>
    where
        F: FnMut(&mut GameRecord) -> Result<(), GameError>,
    {
        let key = game_key(id);
        loop {
            let (mut record, raw) = self.load(id)?;
            change(&mut record)?;
            let json = serde_json::to_string(&record)?;
            if self.store.compare_and_swap(&key, Some(&raw), &json)? {
                return Ok(record);
            }
            debug!(game = %id, "game changed concurrently, retrying");
        }
    }

    fn counter(&self, key: &str) -> Result<u64, GameError> {
        self.store
            .get(key)?
            .map_or(Ok(0), |value| parse_counter(key, &value))
    }

    /// Atomically add one to a counter and return the new value
    fn increment_counter(&self, key: &str) -> Result<u64, GameError> {
        loop {
            let current = self.store.get(key)?;
            let next = match &current {
                Some(value) => parse_counter(key, value)? + 1,
                None => 1,
            };
            if self
                .store
                .compare_and_swap(key, current.as_deref(), &next.to_string())?
            {
                return Ok(next);
            }
        }
    }
}

fn parse_counter(key: &str, value: &str) -> Result<u64, GameError> {
    value
        .parse()
        .map_err(|_| GameError::CorruptCounter(key.to_string()))
}
