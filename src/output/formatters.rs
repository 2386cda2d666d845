//! Formatting utilities for terminal output

use crate::core::{Color, Feedback, LetterPool, Word};
use crate::evaluator::GuessAttempt;
use colored::Colorize;

/// Format feedback as emoji squares
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback.to_emoji()
}

/// Render a guess as colored letter tiles
#[must_use]
pub fn colored_tiles(word: &Word, feedback: Feedback) -> String {
    word.chars()
        .iter()
        .zip(feedback.colors())
        .map(|(&letter, color)| {
            let tile = format!(" {} ", char::from(letter));
            match color {
                Color::Green => tile.black().on_green().bold().to_string(),
                Color::Yellow => tile.black().on_yellow().bold().to_string(),
                Color::Gray => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Emoji grid of a finished game, one row per attempt
#[must_use]
pub fn share_grid(attempts: &[GuessAttempt]) -> String {
    attempts
        .iter()
        .map(|attempt| attempt.feedback.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pool letters spaced out, with the featured letter bracketed
///
/// # Examples
/// ```
/// use wordle_cafe::core::LetterPool;
/// use wordle_cafe::output::formatters::pool_line;
///
/// let pool = LetterPool::parse_list("T,W,N,S,I,A,W,M,N,X,R,E").unwrap();
/// assert_eq!(pool_line(&pool, b'T'), "[T] W N S I A W M N X R E");
/// ```
#[must_use]
pub fn pool_line(pool: &LetterPool, featured: u8) -> String {
    pool.letters()
        .iter()
        .map(|&letter| {
            if letter == featured {
                format!("[{}]", char::from(letter))
            } else {
                char::from(letter).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_all_gray() {
        let feedback = Feedback::new([Color::Gray; 5]);
        assert_eq!(feedback_to_emoji(feedback), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_all_green() {
        assert_eq!(feedback_to_emoji(Feedback::PERFECT), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn tiles_keep_letters_in_order() {
        colored::control::set_override(false);
        let word = Word::new("MOCHA").unwrap();
        assert_eq!(colored_tiles(&word, Feedback::PERFECT), " M  O  C  H  A ");
    }

    #[test]
    fn share_grid_one_row_per_attempt() {
        let target = Word::new("SCONE").unwrap();
        let attempts = vec![
            GuessAttempt::new(Word::new("TOAST").unwrap(), &target),
            GuessAttempt::new(Word::new("SCONE").unwrap(), &target),
        ];
        let grid = share_grid(&attempts);
        assert_eq!(grid.lines().count(), 2);
        assert_eq!(grid.lines().last(), Some("🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
