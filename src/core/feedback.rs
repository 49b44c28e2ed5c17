//! Per-letter feedback for a guess
//!
//! Each position of a guess is classified against the secret word:
//! - Exact: same character at the same position
//! - Present: character occurs somewhere in the secret
//! - Absent: character does not occur in the secret (digits and punctuation
//!   never do)
//!
//! Presence is a plain membership test. A letter repeated in the guess is marked
//! `Present` at every non-exact position even when the secret holds it only once.

use super::{Guess, WORD_LENGTH, Word};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Exact,
    Present,
    Absent,
}

impl Classification {
    /// Emoji square for this classification
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, one classification per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Classification; WORD_LENGTH]);

impl Feedback {
    /// All exact (the guess is the secret)
    pub const SOLVED: Self = Self([Classification::Exact; WORD_LENGTH]);

    /// Create feedback from raw classifications
    #[must_use]
    pub const fn new(classifications: [Classification; WORD_LENGTH]) -> Self {
        Self(classifications)
    }

    /// Compute the feedback when `guess` is played against `secret`
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{Classification::*, Feedback, Guess, Word};
    ///
    /// let guess = Guess::new("grape").unwrap();
    /// let secret = Word::new("apple").unwrap();
    /// let feedback = Feedback::compute(&guess, &secret);
    ///
    /// assert_eq!(feedback.classifications(), &[Absent, Absent, Present, Present, Exact]);
    /// ```
    #[must_use]
    pub fn compute(guess: &Guess, secret: &Word) -> Self {
        let mut result = [Classification::Absent; WORD_LENGTH];

        for (i, (&c, slot)) in guess.chars().iter().zip(result.iter_mut()).enumerate() {
            *slot = if c == secret.letter_at(i) {
                Classification::Exact
            } else if secret.contains(c) {
                Classification::Present
            } else {
                Classification::Absent
            };
        }

        Self(result)
    }

    /// The classifications in position order
    #[inline]
    #[must_use]
    pub const fn classifications(&self) -> &[Classification; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is exact
    #[must_use]
    pub fn is_solved(self) -> bool {
        self == Self::SOLVED
    }

    /// Count the exact squares
    #[must_use]
    pub fn count_exact(self) -> usize {
        self.count(Classification::Exact)
    }

    /// Count the present squares
    #[must_use]
    pub fn count_present(self) -> usize {
        self.count(Classification::Present)
    }

    fn count(self, kind: Classification) -> usize {
        self.0.iter().filter(|&&c| c == kind).count()
    }

    /// Convert to an emoji string like "⬜⬜🟨🟨🟩"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
