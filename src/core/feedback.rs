//! Daily-game feedback representation
//!
//! One [`Color`] per guess position:
//! - Gray: letter not available in the target
//! - Yellow: letter in the target, at another position
//! - Green: letter in the correct position
//!
//! Scoring lives in [`crate::evaluator::daily`]; this module only stores
//! and renders the result.

use super::WORD_LEN;
use std::fmt;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Gray,
    Yellow,
    Green,
}

impl Color {
    /// Square emoji for this color
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Gray => '⬜',
            Self::Yellow => '🟨',
            Self::Green => '🟩',
        }
    }

    /// ASCII code used in feedback strings: `G`, `Y` or `-`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Gray => '-',
            Self::Yellow => 'Y',
            Self::Green => 'G',
        }
    }
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Color; WORD_LEN]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Color::Green; WORD_LEN]);

    /// Wrap a color array
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; WORD_LEN]) -> Self {
        Self(colors)
    }

    /// The per-position colors
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; WORD_LEN] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.0 {
            write!(f, "{}", color.code())?;
        }
        Ok(())
    }
}
