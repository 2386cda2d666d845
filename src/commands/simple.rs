//! Simple interactive CLI mode
//!
//! Text-based daily game without TUI

use super::read_input;
use crate::game::{DailyGame, DailyStatus};
use crate::output::formatters::{colored_tiles, share_grid};
use crate::wordlists::Dictionary;
use colored::Colorize;
use std::io;

/// Run the daily game in plain text
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(mut game: DailyGame, dictionary: &Dictionary) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle Cafe - Daily Word                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the 5-letter word in {} tries.",
        game.max_attempts()
    );
    println!("  - {} letter is in the right spot", " G ".black().on_green());
    println!("  - {} letter is in the word elsewhere", " Y ".black().on_yellow());
    println!("  - {} letter is not in the word\n", " - ".white().on_bright_black());
    println!("Type 'quit' to exit.\n");

    while !game.is_over() {
        let turn = game.attempts().len() + 1;
        let prompt = format!("Guess {turn}/{}", game.max_attempts());
        let Some(input) = read_input(&prompt)? else {
            return Ok(());
        };

        if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        match game.submit(&input, dictionary) {
            Ok(_) => {
                println!();
                for attempt in game.attempts() {
                    println!("   {}", colored_tiles(&attempt.guess, attempt.feedback));
                }
                println!();
            }
            Err(rejection) => println!("❌ {rejection}\n"),
        }
    }

    println!("{}", "═".repeat(70).bright_cyan());
    if game.status() == DailyStatus::Won {
        let guesses = game.attempts().len();
        println!(
            "{}",
            format!(
                "   🎉 Solved in {guesses} {}!",
                if guesses == 1 { "guess" } else { "guesses" }
            )
            .bright_green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("   The word was {}", game.target()).red().bold()
        );
    }
    println!("{}", "═".repeat(70).bright_cyan());

    println!("\n{}\n", share_grid(game.attempts()));
    Ok(())
}
