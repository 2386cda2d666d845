//! Cafe counter mode
//!
//! Plays cafe games one customer at a time: create a game, show the letters,
//! take guesses until one is accepted. Closing the counter prints the
//! counters and the games the next customers will get.

use super::read_input;
use crate::evaluator::Rejection;
use crate::game::{CafeGames, GameError, GameStatus};
use crate::output::formatters::pool_line;
use crate::output::{print_cafe_stats, print_upcoming};
use crate::store::KeyValueStore;
use anyhow::Result;
use colored::Colorize;
use uuid::Uuid;

/// Games listed in the closing preview
pub const UPCOMING_PREVIEW: usize = 20;

/// Run cafe games until the operator quits
///
/// # Errors
///
/// Returns an error if stdin/stdout fail or the game store fails.
pub fn run_cafe<S: KeyValueStore>(games: &CafeGames<'_, S>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Wordle Cafe - Letter Puzzle                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Make a 5-letter word from the letters, using the featured letter.");
    println!("You get one valid guess. Type 'quit' to exit.\n");

    let mut unplayed: Option<(Uuid, u64)> = None;

    'customers: loop {
        let record = games.create_game()?;
        let record = games.open_game(record.id)?;
        let puzzle = &record.puzzle;

        println!("{}", "─".repeat(60).cyan());
        println!(
            "Game #{}  (puzzle {}.{} of {})",
            record.sequence, record.puzzle_number, record.answer_number, record.total_answers
        );
        println!(
            "Featured letter: {}",
            char::from(puzzle.featured()).to_string().bright_yellow().bold()
        );
        println!("Letters:         {}", pool_line(puzzle.pool(), puzzle.featured()));
        println!("{}", "─".repeat(60).cyan());

        unplayed = Some((record.id, record.sequence));
        let played = loop {
            let Some(input) = read_input("Your word")? else {
                break 'customers;
            };
            if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
                break 'customers;
            }

            match games.submit_guess(record.id, &input) {
                Ok(played) => break played,
                Err(GameError::Rejected(rejection)) => print_rejection(rejection),
                Err(e) => return Err(e.into()),
            }
        };
        unplayed = None;

        if played.status == GameStatus::Won {
            println!("{}", "\n🎉 WINNER! Show this screen to the staff.\n".green().bold());
        } else {
            println!(
                "{}",
                format!("\n❌ Not this time. The word was {}.\n", puzzle.answer())
                    .red()
                    .bold()
            );
        }

        match read_input("Next customer? (yes/no)")?.as_deref() {
            Some("yes" | "y" | "") => {}
            _ => break,
        }
    }

    if let Some((id, sequence)) = unplayed {
        if games.was_accessed(id)? {
            println!("{}", format!("\nGame #{sequence} was shown but never played.").yellow());
        }
    }

    print_cafe_stats(&games.stats()?);
    print_upcoming(&games.upcoming(UPCOMING_PREVIEW)?);
    println!("\n👋 Closing the counter.\n");
    Ok(())
}

fn print_rejection(rejection: Rejection) {
    println!("{}", format!("⚠️  {rejection}. Try again.").yellow());
}
