//! Batch puzzle generation
//!
//! Picks answers at random from the catalog, builds a puzzle for each and
//! renders the record file read back by [`crate::wordlists::loader`].

use crate::error::{Error, Result};
use crate::generator::{GeneratedPuzzle, PuzzleGenerator};
use crate::wordlists::Lexicon;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::warn;

/// First lines of every generated record file
pub const RECORD_FILE_HEADER: &str = "\
# Generated Letter Puzzle Variations - FULLY SCRAMBLED
# Format: FEATURED_LETTER|ANSWER|AVAILABLE_LETTERS
";

/// Valid words listed per puzzle in the record file comments
const EXAMPLES_PER_PUZZLE: usize = 5;

/// Result of a batch run
#[derive(Debug)]
pub struct GenerateReport {
    pub puzzles: Vec<GeneratedPuzzle>,
    /// Answers the generator could not build a puzzle for
    pub skipped: usize,
    pub duration: Duration,
}

impl GenerateReport {
    #[must_use]
    pub fn average_difficulty(&self) -> f64 {
        if self.puzzles.is_empty() {
            return 0.0;
        }
        let total: usize = self.puzzles.iter().map(GeneratedPuzzle::difficulty).sum();
        total as f64 / self.puzzles.len() as f64
    }

    /// Smallest and largest difficulty
    #[must_use]
    pub fn difficulty_range(&self) -> Option<(usize, usize)> {
        let min = self.puzzles.iter().map(GeneratedPuzzle::difficulty).min()?;
        let max = self.puzzles.iter().map(GeneratedPuzzle::difficulty).max()?;
        Some((min, max))
    }
}

/// Generate `count` puzzles with answers drawn uniformly from the catalog
///
/// Answers are drawn with replacement. A failed puzzle is logged and
/// counted, not fatal.
pub fn run_generate<R: Rng>(
    generator: &PuzzleGenerator,
    lexicon: &Lexicon,
    count: usize,
    rng: &mut R,
    show_progress: bool,
) -> GenerateReport {
    let start = Instant::now();
    let dictionary = lexicon.dictionary().words();

    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) =
        ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let mut puzzles = Vec::with_capacity(count);
    let mut skipped = 0;

    for _ in 0..count {
        let Some(answer) = lexicon.answers().choose(rng) else {
            break;
        };
        pb.set_message(answer.to_string());

        match generator.generate(answer, dictionary, rng) {
            Ok(generated) => puzzles.push(generated),
            Err(e) => {
                warn!(answer = %answer, "skipping puzzle: {e}");
                skipped += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    GenerateReport {
        puzzles,
        skipped,
        duration: start.elapsed(),
    }
}

/// Render puzzles as a record file
///
/// Each record is preceded by two comment lines: the number of valid words
/// with the featured letter, and up to five example words.
///
/// # Examples
/// ```
/// use wordle_cafe::commands::generate::format_records;
///
/// let text = format_records(&[]);
/// assert!(text.starts_with("# Generated Letter Puzzle Variations"));
/// ```
#[must_use]
pub fn format_records(puzzles: &[GeneratedPuzzle]) -> String {
    let mut out = String::from(RECORD_FILE_HEADER);
    out.push('\n');

    for (i, generated) in puzzles.iter().enumerate() {
        let puzzle = &generated.puzzle;
        let examples: Vec<&str> = if generated.valid_words.is_empty() {
            vec![puzzle.answer().text()]
        } else {
            generated
                .valid_words
                .iter()
                .take(EXAMPLES_PER_PUZZLE)
                .map(|w| w.text())
                .collect()
        };

        let _ = writeln!(
            out,
            "# Puzzle {}: {} words with '{}'",
            i + 1,
            generated.difficulty(),
            char::from(puzzle.featured())
        );
        let _ = writeln!(out, "# Examples: {}", examples.join(", "));
        let _ = writeln!(out, "{}\n", puzzle.to_record());
    }

    out
}

/// Write a record file
///
/// # Errors
/// Returns [`Error::Write`] if the file cannot be written.
pub fn write_records(path: &Path, puzzles: &[GeneratedPuzzle]) -> Result<()> {
    fs::write(path, format_records(puzzles)).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::{load_puzzles, puzzles_from_text};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generates_requested_count() {
        let lexicon = Lexicon::embedded().unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let report = run_generate(&PuzzleGenerator::default(), &lexicon, 10, &mut rng, false);
        assert_eq!(report.puzzles.len() + report.skipped, 10);
        assert_eq!(report.skipped, 0);

        let (min, max) = report.difficulty_range().unwrap();
        assert!(min >= 1);
        assert!(report.average_difficulty() >= min as f64);
        assert!(report.average_difficulty() <= max as f64);
    }

    #[test]
    fn records_parse_back() {
        let lexicon = Lexicon::embedded().unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let report = run_generate(&PuzzleGenerator::default(), &lexicon, 5, &mut rng, false);

        let text = format_records(&report.puzzles);
        assert!(text.contains("# Puzzle 1: "));
        assert!(text.contains("# Examples: "));

        let load = puzzles_from_text(&text);
        assert_eq!(load.skipped, 0);
        let parsed: Vec<_> = load.puzzles;
        let expected: Vec<_> = report.puzzles.iter().map(|g| g.puzzle.clone()).collect();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn empty_report_has_no_range() {
        let report = GenerateReport {
            puzzles: Vec::new(),
            skipped: 0,
            duration: Duration::ZERO,
        };
        assert!(report.difficulty_range().is_none());
        assert!(report.average_difficulty().abs() < f64::EPSILON);
    }

    #[test]
    fn write_records_to_file() {
        let lexicon = Lexicon::embedded().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let report = run_generate(&PuzzleGenerator::default(), &lexicon, 3, &mut rng, false);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("letter_puzzles.txt");
        write_records(&path, &report.puzzles).unwrap();

        let load = load_puzzles(&path).unwrap();
        assert_eq!(load.puzzles.len(), 3);
    }
}
