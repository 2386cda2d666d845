//! Daily game feedback
//!
//! Standard two-pass scoring. Greens are assigned first and consume their
//! target letter; the remaining guess positions are then scanned left to
//! right, each taking an unconsumed target letter (Yellow) if one is left.

use crate::core::{Color, Feedback, LetterCounts, WORD_LEN, Word};

/// Score `guess` against `target`
///
/// For every letter, greens plus yellows never exceed its count in the
/// target. When a guess repeats a letter more often than the target holds
/// it, the leftmost non-green copies get the yellows.
///
/// # Examples
/// ```
/// use wordle_cafe::core::{Feedback, Word};
/// use wordle_cafe::evaluator::score;
///
/// let guess = Word::new("allow").unwrap();
/// let target = Word::new("aloof").unwrap();
/// assert_eq!(score(&guess, &target).to_string(), "GG-G-");
/// assert_eq!(score(&target, &target), Feedback::PERFECT);
/// ```
#[must_use]
pub fn score(guess: &Word, target: &Word) -> Feedback {
    let guess = guess.chars();
    let target = target.chars();

    let mut colors = [Color::Gray; WORD_LEN];
    let mut unmatched = LetterCounts::default();

    // First pass: exact matches
    for ((color, &g), &t) in colors.iter_mut().zip(guess).zip(target) {
        if g == t {
            *color = Color::Green;
        } else {
            unmatched.add(t);
        }
    }

    // Second pass: misplaced letters, left to right
    for (color, &g) in colors.iter_mut().zip(guess) {
        if *color != Color::Green && unmatched.take(g) {
            *color = Color::Yellow;
        }
    }

    Feedback::new(colors)
}

/// One scored daily guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessAttempt {
    pub guess: Word,
    pub feedback: Feedback,
}

impl GuessAttempt {
    /// Score `guess` against `target`
    #[must_use]
    pub fn new(guess: Word, target: &Word) -> Self {
        let feedback = score(&guess, target);
        Self { guess, feedback }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{Gray, Green, Yellow};

    fn scored(guess: &str, target: &str) -> [Color; WORD_LEN] {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        *score(&guess, &target).colors()
    }

    #[test]
    fn repeated_guess_letter_single_in_target() {
        assert_eq!(scored("ALLOW", "ALOOF"), [Green, Green, Gray, Green, Gray]);
    }

    #[test]
    fn leftmost_copy_gets_the_yellow() {
        assert_eq!(scored("BOBBY", "ABBEY"), [Yellow, Gray, Green, Gray, Green]);
    }

    #[test]
    fn identical_words_all_green() {
        for word in ["STARE", "LATTE", "COCOA", "MAMMA"] {
            assert_eq!(scored(word, word), [Green; WORD_LEN]);
        }
    }

    #[test]
    fn disjoint_words_all_gray() {
        assert_eq!(scored("BUMPY", "STARE"), [Gray; WORD_LEN]);
    }

    #[test]
    fn anagram_all_yellow() {
        assert_eq!(scored("RATES", "STARE"), [Yellow; WORD_LEN]);
    }

    #[test]
    fn green_takes_priority_over_earlier_yellow() {
        // The E in position 4 is green, so the first E finds nothing left
        assert_eq!(scored("EERIE", "STARE"), [Gray, Gray, Yellow, Gray, Green]);
    }

    #[test]
    fn marks_never_exceed_target_multiplicity() {
        let words = ["LATTE", "TOAST", "SPEED", "EERIE", "ALLOW", "ALOOF", "BOBBY", "ABBEY"];
        for guess in words {
            for target in words {
                let colors = scored(guess, target);
                let target_counts = LetterCounts::from_letters(target.as_bytes());
                for letter in guess.bytes() {
                    let marked = guess
                        .bytes()
                        .zip(colors)
                        .filter(|&(g, c)| g == letter && c != Gray)
                        .count();
                    assert!(
                        marked <= usize::from(target_counts.get(letter)),
                        "{guess} vs {target}: too many marks for {}",
                        char::from(letter)
                    );
                }
            }
        }
    }

    #[test]
    fn attempt_records_feedback() {
        let target = Word::new("MOCHA").unwrap();
        let attempt = GuessAttempt::new(Word::new("MOCHA").unwrap(), &target);
        assert!(attempt.feedback.is_perfect());
    }
}
