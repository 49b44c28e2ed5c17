//! A submitted guess
//!
//! Guesses are only checked for length. Any five characters are a playable
//! guess, so `"12345"` or `"ap-le"` are scored like any other input.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// A guess with the wrong number of characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessLengthError(pub usize);

impl fmt::Display for GuessLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {WORD_LENGTH} characters, got {}", self.0)
    }
}

impl std::error::Error for GuessLengthError {}

/// Five lowercased characters played against the secret
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    text: String,
    chars: [char; WORD_LENGTH],
}

impl Guess {
    /// Lowercase `text` and check that it is exactly five characters long
    ///
    /// # Errors
    /// Returns the character count as a `GuessLengthError` otherwise.
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::Guess;
    ///
    /// assert_eq!(Guess::new("GRAPE").unwrap().text(), "grape");
    /// assert_eq!(Guess::new("12345").unwrap().text(), "12345");
    /// assert!(Guess::new("grapes").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, GuessLengthError> {
        let text = text.into().to_lowercase();
        let letters: Vec<char> = text.chars().collect();
        let len = letters.len();
        let chars: [char; WORD_LENGTH] = letters
            .try_into()
            .map_err(|_| GuessLengthError(len))?;

        Ok(Self { text, chars })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// Whether this guess spells `word`
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.text == word.text()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
