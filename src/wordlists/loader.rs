//! Word list and puzzle record loading
//!
//! Provides functions to load word lists and puzzle records from files or from
//! the embedded constants. Bad lines are skipped and logged; loading only fails
//! when a file cannot be read.

use crate::core::{Puzzle, Word};
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Words parsed from text, plus how many lines were rejected
#[derive(Debug, Default)]
pub struct WordLoad {
    pub words: Vec<Word>,
    pub skipped: usize,
}

/// Puzzles parsed from record text, plus how many lines were rejected
#[derive(Debug, Default)]
pub struct PuzzleLoad {
    pub puzzles: Vec<Puzzle>,
    pub skipped: usize,
}

/// Parse newline-delimited words
///
/// Lines are trimmed and uppercased; blank lines are ignored and invalid
/// tokens are skipped with a warning.
#[must_use]
pub fn words_from_text(content: &str) -> WordLoad {
    let mut load = WordLoad::default();

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match Word::new(trimmed) {
            Ok(word) => load.words.push(word),
            Err(e) => {
                warn!(line = line_num + 1, token = trimmed, "skipping word: {e}");
                load.skipped += 1;
            }
        }
    }

    load
}

/// Load words from a file
///
/// Returns the valid words, skipping any invalid entries.
///
/// # Errors
///
/// Returns [`Error::Read`] if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_cafe::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let load = words_from_text(&content);
    info!(
        path = %path.display(),
        words = load.words.len(),
        skipped = load.skipped,
        "loaded word list"
    );

    Ok(load.words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_cafe::wordlists::loader::words_from_slice;
/// use wordle_cafe::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Parse puzzle records, one per line
///
/// Blank lines and lines starting with `#` are ignored. Malformed records are
/// skipped and logged with their line number.
#[must_use]
pub fn puzzles_from_text(content: &str) -> PuzzleLoad {
    let mut load = PuzzleLoad::default();

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match Puzzle::parse_record(trimmed) {
            Ok(puzzle) => load.puzzles.push(puzzle),
            Err(source) => {
                let err = Error::MalformedRecord {
                    line: line_num + 1,
                    source,
                };
                warn!(record = trimmed, "{err}: {}", err_source(&err));
                load.skipped += 1;
            }
        }
    }

    debug!(
        puzzles = load.puzzles.len(),
        skipped = load.skipped,
        "parsed puzzle records"
    );
    load
}

/// Load puzzle records from a file
///
/// # Errors
///
/// Returns [`Error::Read`] if the file cannot be read. Malformed records do
/// not fail the load.
pub fn load_puzzles<P: AsRef<Path>>(path: P) -> Result<PuzzleLoad> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let load = puzzles_from_text(&content);
    info!(
        path = %path.display(),
        puzzles = load.puzzles.len(),
        skipped = load.skipped,
        "loaded puzzle records"
    );

    Ok(load)
}

fn err_source(err: &Error) -> String {
    std::error::Error::source(err).map_or_else(String::new, ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_text_counts_skipped_lines() {
        let load = words_from_text("crane\n\n  slate  \nab12c\ntoolong\n");
        assert_eq!(load.words.len(), 2);
        assert_eq!(load.words[1].text(), "SLATE");
        assert_eq!(load.skipped, 2);
    }

    #[test]
    fn puzzles_from_text_skips_comments_and_bad_lines() {
        let content = "\
# Generated Letter Puzzle Variations
# Format: FEATURED_LETTER|ANSWER|AVAILABLE_LETTERS

T|STARE|T,W,N,S,I,A,W,M,N,X,R,E
T|STARE|T,W,N
H|HOUSE|H,O,U,S,B,L,M,K,P,E,D,R|X
M|MAGIC|M,A,G,I,C,W,N,L,K,P,F,T
";
        let load = puzzles_from_text(content);
        assert_eq!(load.puzzles.len(), 2);
        assert_eq!(load.skipped, 2);
        assert_eq!(load.puzzles[1].answer().text(), "MAGIC");
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "latte\nmocha\nnope").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "LATTE");
    }

    #[test]
    fn load_from_missing_file_fails() {
        let result = load_from_file("/definitely/not/here/words.txt");
        assert!(matches!(result, Err(Error::Read { .. })));
    }

    #[test]
    fn load_puzzles_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# header\nH|HOUSE|H,O,U,S,B,L,M,K,P,E,D,R").unwrap();

        let load = load_puzzles(file.path()).unwrap();
        assert_eq!(load.puzzles.len(), 1);
        assert_eq!(load.skipped, 0);
    }

    #[test]
    fn load_from_embedded_answers() {
        use crate::wordlists::ANSWERS;

        let words = words_from_slice(ANSWERS);
        assert_eq!(words.len(), ANSWERS.len());
    }
}
