//! Command implementations

pub mod cafe;
pub mod check;
pub mod expand;
pub mod generate;
pub mod schedule;
pub mod simple;

pub use cafe::run_cafe;
pub use check::{CheckResult, ScoreResult, check_guess, score_words};
pub use expand::{ExpandSummary, PuzzleBreakdown, run_expand};
pub use generate::{GenerateReport, format_records, run_generate, write_records};
pub use schedule::{ScheduledDay, run_schedule};
pub use simple::run_simple;

use std::io::{self, Write};

/// Prompt and read one trimmed line; `None` at end of input
fn read_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
