//! Display functions for command results

use super::formatters::{colored_tiles, create_progress_bar, feedback_to_emoji, pool_line};
use crate::commands::check::{CheckResult, ScoreResult};
use crate::commands::expand::ExpandSummary;
use crate::commands::generate::GenerateReport;
use crate::commands::schedule::ScheduledDay;
use crate::evaluator::CafeOutcome;
use crate::game::CafeStats;
use crate::generator::RotationEntry;
use colored::Colorize;
use std::path::Path;

/// Print daily feedback for one guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{}  {}  ({})",
        colored_tiles(&result.guess, result.feedback),
        feedback_to_emoji(result.feedback),
        result.feedback
    );
    if result.feedback.is_perfect() {
        println!("{}", "✅ Correct!".green().bold());
    }
}

/// Print a cafe guess verdict
pub fn print_check_result(result: &CheckResult) {
    let puzzle = &result.puzzle;
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Featured letter: {}",
        char::from(puzzle.featured()).to_string().bright_yellow().bold()
    );
    println!("Letters:         {}", pool_line(puzzle.pool(), puzzle.featured()));
    println!("{}", "─".repeat(60).cyan());

    match &result.verdict {
        Ok(verdict) if verdict.outcome == CafeOutcome::Won => {
            println!("{}", format!("🎉 {} is the answer!", verdict.guess).green().bold());
        }
        Ok(verdict) => {
            println!(
                "{}",
                format!("❌ {} is valid, but the answer was {}", verdict.guess, puzzle.answer())
                    .red()
                    .bold()
            );
        }
        Err(rejection) => println!("{}", format!("⚠️  {rejection}").yellow()),
    }
}

/// Print the summary of a batch generation
pub fn print_generate_report(report: &GenerateReport, written_to: Option<&Path>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE GENERATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    match written_to {
        Some(path) => println!(
            "\n📁 Generated {} puzzles in '{}'",
            report.puzzles.len(),
            path.display()
        ),
        None => println!("\n📁 Generated {} puzzles", report.puzzles.len()),
    }
    if report.skipped > 0 {
        println!(
            "{}",
            format!("   Skipped {} answers", report.skipped).yellow()
        );
    }
    println!("   Time taken: {:.2}s", report.duration.as_secs_f64());

    let Some((min, max)) = report.difficulty_range() else {
        return;
    };
    let average = report.average_difficulty();
    println!(
        "📊 Average difficulty: {} words",
        format!("{average:.1}").bright_yellow().bold()
    );
    println!("📊 Range: {min} - {max} words");
    println!(
        "   [{}]",
        create_progress_bar(average, max as f64, 30).green()
    );

    if let Some(sample) = report.puzzles.first() {
        let puzzle = &sample.puzzle;
        let examples: Vec<&str> = sample.valid_words.iter().take(3).map(|w| w.text()).collect();
        println!("\n📋 {}", "SAMPLE PUZZLE:".bright_cyan().bold());
        println!("   Featured:    {}", char::from(puzzle.featured()));
        println!("   Answer:      {}", puzzle.answer());
        println!("   Letters:     {}", puzzle.pool());
        println!("   Valid words: {}...", examples.join(", "));
    }
}

/// Print how the base puzzles expand into the rotation
pub fn print_expand_summary(summary: &ExpandSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE ROTATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for row in &summary.breakdown {
        println!(
            "\nPuzzle {} ({}): {} valid answers",
            row.puzzle_number,
            row.original_answer,
            row.answers.len().to_string().bright_yellow()
        );
        if !row.answers.is_empty() {
            let shown: Vec<&str> = row.answers.iter().take(5).map(|w| w.text()).collect();
            let more = if row.answers.len() > 5 { "..." } else { "" };
            println!("  Featured '{}': {}{more}", row.featured, shown.join(", "));
        }
    }

    println!(
        "\n{}",
        format!(
            "✅ {} puzzles expanded to {} games",
            summary.breakdown.len(),
            summary.total_games()
        )
        .green()
        .bold()
    );
}

/// Print cafe counters
pub fn print_cafe_stats(stats: &CafeStats) {
    println!("\n📈 {}", "Cafe statistics:".bright_cyan().bold());
    println!("   Games created:  {}", stats.games_created);
    println!("   Winners:        {}", stats.games_won.to_string().green());
    println!("   Rotation size:  {}", stats.rotation_len);
}

/// Print the games the next customers will get
pub fn print_upcoming(entries: &[&RotationEntry]) {
    if entries.is_empty() {
        return;
    }

    println!("\n🗓️  {}", "Next games:".bright_cyan().bold());
    for (offset, entry) in entries.iter().enumerate() {
        println!(
            "   {:>3}. {} '{}' (puzzle {}.{} of {})",
            offset + 1,
            entry.puzzle.answer(),
            char::from(entry.puzzle.featured()),
            entry.puzzle_number,
            entry.answer_number,
            entry.total_answers
        );
    }
}

/// Print the daily words for a run of days
pub fn print_schedule(days: &[ScheduledDay]) {
    println!("\n📅 {}", "Daily words:".bright_cyan().bold());
    for day in days {
        match &day.replaced {
            Some(replaced) => println!(
                "   {}  {}  {}",
                day.date,
                day.word.to_string().bright_yellow().bold(),
                format!("(forced, rotation: {replaced})").dimmed()
            ),
            None => println!("   {}  {}", day.date, day.word),
        }
    }
}
