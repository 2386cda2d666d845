//! Daily game session and answer schedule

use crate::core::Word;
use crate::error::{Error, Result};
use crate::evaluator::GuessAttempt;
use crate::wordlists::Dictionary;
use chrono::{Local, NaiveDate};
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;
use tracing::info;

/// Attempts allowed per daily game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Largest attempt limit a configuration may set
pub const MAX_ATTEMPTS_LIMIT: usize = 20;

/// First day of the answer rotation
#[must_use]
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

/// State of a daily game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyStatus {
    InProgress,
    Won,
    Lost,
}

/// Why a daily guess was refused; no attempt is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DailyRejection {
    #[error("Please enter a valid 5-letter word.")]
    InvalidWord,
    #[error("Not in word list. Try again.")]
    NotInWordList,
    #[error("The game is over.")]
    GameOver,
}

/// One player's daily game
#[derive(Debug, Clone)]
pub struct DailyGame {
    target: Word,
    attempts: Vec<GuessAttempt>,
    max_attempts: usize,
}

impl DailyGame {
    /// Start a game with the default six attempts
    #[must_use]
    pub const fn new(target: Word) -> Self {
        Self::with_max_attempts(target, DEFAULT_MAX_ATTEMPTS)
    }

    #[must_use]
    pub const fn with_max_attempts(target: Word, max_attempts: usize) -> Self {
        Self {
            target,
            attempts: Vec::new(),
            max_attempts,
        }
    }

    /// Submit a raw guess
    ///
    /// The guess is trimmed and uppercased. Accepted guesses are scored and
    /// recorded; the game ends on a correct guess or when attempts run out.
    ///
    /// # Errors
    /// Returns [`DailyRejection`] for a malformed guess, an unknown word, or a
    /// finished game. Rejected guesses leave the game unchanged.
    ///
    /// # Examples
    /// ```
    /// use wordle_cafe::core::Word;
    /// use wordle_cafe::game::{DailyGame, DailyRejection, DailyStatus};
    /// use wordle_cafe::wordlists::Dictionary;
    ///
    /// let dictionary: Dictionary = ["LATTE", "MOCHA"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let mut game = DailyGame::new(Word::new("MOCHA").unwrap());
    ///
    /// assert_eq!(game.submit("cafe", &dictionary), Err(DailyRejection::InvalidWord));
    /// game.submit("latte", &dictionary).unwrap();
    /// game.submit("mocha", &dictionary).unwrap();
    /// assert_eq!(game.status(), DailyStatus::Won);
    /// ```
    pub fn submit(
        &mut self,
        raw: &str,
        dictionary: &Dictionary,
    ) -> std::result::Result<&GuessAttempt, DailyRejection> {
        if self.is_over() {
            return Err(DailyRejection::GameOver);
        }

        let guess = Word::new(raw.trim()).map_err(|_| DailyRejection::InvalidWord)?;
        if !dictionary.contains(&guess) {
            return Err(DailyRejection::NotInWordList);
        }

        self.attempts.push(GuessAttempt::new(guess, &self.target));
        self.attempts
            .last()
            .ok_or(DailyRejection::GameOver)
    }

    #[must_use]
    pub fn status(&self) -> DailyStatus {
        if self
            .attempts
            .last()
            .is_some_and(|attempt| attempt.feedback.is_perfect())
        {
            DailyStatus::Won
        } else if self.attempts.len() >= self.max_attempts {
            DailyStatus::Lost
        } else {
            DailyStatus::InProgress
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status() != DailyStatus::InProgress
    }

    #[must_use]
    pub fn attempts(&self) -> &[GuessAttempt] {
        &self.attempts
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts.len())
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

/// An override word was not in the answer catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not in the answer list")]
pub struct NotAnAnswer(pub String);

/// Picks the answer of the day
///
/// Day `n` after the start date gets `answers[n mod len]`; dates before the
/// start wrap around. One override (date, word) may replace the answer for
/// that date only.
#[derive(Debug, Clone)]
pub struct DailySchedule {
    answers: Vec<Word>,
    start: NaiveDate,
    override_word: Option<(NaiveDate, Word)>,
}

impl DailySchedule {
    /// Schedule over `answers` starting at `start`
    ///
    /// # Errors
    /// Returns [`Error::EmptyWordList`] if `answers` is empty.
    pub fn new(answers: Vec<Word>, start: NaiveDate) -> Result<Self> {
        if answers.is_empty() {
            return Err(Error::EmptyWordList {
                kind: "answer catalog",
            });
        }
        Ok(Self {
            answers,
            start,
            override_word: None,
        })
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Answer for `date`, honoring an override for that date
    #[must_use]
    pub fn answer_for(&self, date: NaiveDate) -> &Word {
        if let Some((_, word)) = self.override_word.as_ref().filter(|(day, _)| *day == date) {
            return word;
        }

        let days = (date - self.start).num_days();
        let len = i64::try_from(self.answers.len()).unwrap_or(i64::MAX);
        &self.answers[days.rem_euclid(len) as usize]
    }

    /// Answer for the local calendar day
    #[must_use]
    pub fn today(&self) -> &Word {
        self.answer_for(Local::now().date_naive())
    }

    /// Replace the answer for `date` with a catalog word
    ///
    /// Any earlier override is discarded.
    ///
    /// # Errors
    /// Returns [`NotAnAnswer`] if `text` is not in the answer catalog.
    pub fn set_override(
        &mut self,
        date: NaiveDate,
        text: &str,
    ) -> std::result::Result<&Word, NotAnAnswer> {
        let text = text.trim().to_uppercase();
        let word = self
            .answers
            .iter()
            .find(|answer| answer.text() == text)
            .cloned()
            .ok_or(NotAnAnswer(text))?;

        info!(%date, word = %word, "daily answer overridden");
        Ok(&self.override_word.insert((date, word)).1)
    }

    /// Replace the answer for `date` with a random catalog word
    pub fn override_random<R: Rng>(&mut self, date: NaiveDate, rng: &mut R) -> &Word {
        let word = self
            .answers
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| self.answer_for(date).clone());

        info!(%date, word = %word, "daily answer overridden at random");
        &self.override_word.insert((date, word)).1
    }

    pub fn clear_override(&mut self) {
        self.override_word = None;
    }

    /// The active override, if any
    #[must_use]
    pub fn current_override(&self) -> Option<(NaiveDate, &Word)> {
        self.override_word.as_ref().map(|(date, word)| (*date, word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn dictionary() -> Dictionary {
        words(&["LATTE", "MOCHA", "SCONE", "TOAST", "BREAD", "HONEY", "SUGAR", "CREAM"])
            .into_iter()
            .collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejections_do_not_use_attempts() {
        let mut game = DailyGame::new(Word::new("SCONE").unwrap());
        let dictionary = dictionary();

        assert_eq!(game.submit("abc", &dictionary), Err(DailyRejection::InvalidWord));
        assert_eq!(game.submit("ab1de", &dictionary), Err(DailyRejection::InvalidWord));
        assert_eq!(game.submit("QUEUE", &dictionary), Err(DailyRejection::NotInWordList));
        assert!(game.attempts().is_empty());
        assert_eq!(game.remaining(), 6);
    }

    #[test]
    fn win_ends_game() {
        let mut game = DailyGame::new(Word::new("SCONE").unwrap());
        let dictionary = dictionary();

        let attempt = game.submit("toast", &dictionary).unwrap();
        assert!(!attempt.feedback.is_perfect());
        assert_eq!(game.status(), DailyStatus::InProgress);

        assert!(game.submit(" scone ", &dictionary).unwrap().feedback.is_perfect());
        assert_eq!(game.status(), DailyStatus::Won);
        assert_eq!(game.submit("latte", &dictionary), Err(DailyRejection::GameOver));
        assert_eq!(game.attempts().len(), 2);
    }

    #[test]
    fn loses_after_max_attempts() {
        let mut game = DailyGame::new(Word::new("SCONE").unwrap());
        let dictionary = dictionary();

        for guess in ["LATTE", "MOCHA", "TOAST", "BREAD", "HONEY", "SUGAR"] {
            assert_eq!(game.status(), DailyStatus::InProgress);
            game.submit(guess, &dictionary).unwrap();
        }
        assert_eq!(game.status(), DailyStatus::Lost);
        assert_eq!(game.remaining(), 0);
        assert_eq!(game.submit("SCONE", &dictionary), Err(DailyRejection::GameOver));
    }

    #[test]
    fn win_on_last_attempt_counts() {
        let mut game = DailyGame::with_max_attempts(Word::new("SCONE").unwrap(), 2);
        let dictionary = dictionary();

        game.submit("LATTE", &dictionary).unwrap();
        game.submit("SCONE", &dictionary).unwrap();
        assert_eq!(game.status(), DailyStatus::Won);
    }

    #[test]
    fn schedule_rotates_by_day() {
        let schedule = DailySchedule::new(words(&["LATTE", "MOCHA", "SCONE"]), date(2025, 1, 1)).unwrap();

        assert_eq!(schedule.answer_for(date(2025, 1, 1)).text(), "LATTE");
        assert_eq!(schedule.answer_for(date(2025, 1, 2)).text(), "MOCHA");
        assert_eq!(schedule.answer_for(date(2025, 1, 4)).text(), "LATTE");
        // Before the start date wraps backwards
        assert_eq!(schedule.answer_for(date(2024, 12, 31)).text(), "SCONE");
    }

    #[test]
    fn override_applies_to_one_date() {
        let mut schedule =
            DailySchedule::new(words(&["LATTE", "MOCHA", "SCONE"]), default_start_date()).unwrap();
        let day = date(2025, 3, 1);
        let natural = schedule.answer_for(day).clone();

        let target = if natural.text() == "SCONE" { "latte" } else { "scone" };
        schedule.set_override(day, target).unwrap();

        assert_eq!(schedule.answer_for(day).text(), target.to_uppercase());
        assert_eq!(
            schedule.answer_for(date(2025, 3, 2)),
            &words(&["LATTE", "MOCHA", "SCONE"])[(59 + 1) % 3]
        );

        schedule.clear_override();
        assert_eq!(schedule.answer_for(day), &natural);
    }

    #[test]
    fn override_must_be_an_answer() {
        let mut schedule = DailySchedule::new(words(&["LATTE"]), default_start_date()).unwrap();
        assert_eq!(
            schedule.set_override(date(2025, 1, 1), "toast"),
            Err(NotAnAnswer("TOAST".to_string()))
        );
        assert!(schedule.current_override().is_none());
    }

    #[test]
    fn random_override_comes_from_catalog() {
        let answers = words(&["LATTE", "MOCHA", "SCONE"]);
        let mut schedule = DailySchedule::new(answers.clone(), default_start_date()).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let day = date(2025, 6, 1);

        let picked = schedule.override_random(day, &mut rng).clone();
        assert!(answers.contains(&picked));
        assert_eq!(schedule.answer_for(day), &picked);
    }

    #[test]
    fn empty_schedule_is_an_error() {
        assert!(DailySchedule::new(Vec::new(), default_start_date()).is_err());
    }
}
