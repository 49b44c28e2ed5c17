//! Vocabulary words
//!
//! Secrets are drawn from a vocabulary of `Word`s: exactly five ASCII letters,
//! stored lowercase. Player guesses are looser (see `Guess`), so the feedback
//! lookups here take a `char` and simply miss for anything that is not a letter.

use super::WORD_LENGTH;
use rustc_hash::FxHashSet;
use std::fmt;

/// A five-letter lowercase vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
    distinct: FxHashSet<u8>,
}

/// Why a string was not accepted as a word or guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "expected {WORD_LENGTH} characters, got {len}")
            }
            Self::NonAscii => write!(f, "vocabulary words must be ASCII"),
            Self::InvalidCharacters => write!(f, "vocabulary words may only contain letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Parse a vocabulary entry, lowercasing it first
    ///
    /// # Errors
    /// `InvalidLength` when the entry is not five characters long, `NonAscii`
    /// for accented or other non-ASCII text, `InvalidCharacters` for digits,
    /// punctuation or whitespace.
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::Word;
    ///
    /// assert_eq!(Word::new("Apple").unwrap().text(), "apple");
    /// assert!(Word::new("apples").is_err());
    /// assert!(Word::new("app1e").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into().to_lowercase();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }
        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(len))?;
        let distinct = letters.iter().copied().collect();

        Ok(Self {
            text,
            letters,
            distinct,
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letter at `position` (0-4)
    ///
    /// # Panics
    /// Panics if `position >= WORD_LENGTH`.
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> char {
        char::from(self.letters[position])
    }

    /// Whether `c` occurs anywhere in the word
    #[inline]
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        u8::try_from(c).is_ok_and(|b| self.distinct.contains(&b))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_is_stored_lowercase() {
        assert_eq!(Word::new("apple").unwrap().text(), "apple");
        assert_eq!(Word::new("GRAPE").unwrap().text(), "grape");
        assert_eq!(Word::new("BrIcK").unwrap().to_string(), "brick");
    }

    #[test]
    fn word_rejects_wrong_length() {
        assert_eq!(Word::new("apples"), Err(WordError::InvalidLength(6)));
        assert_eq!(Word::new("appl"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_rejects_non_letters() {
        // five characters, six bytes
        assert_eq!(Word::new("crème"), Err(WordError::NonAscii));
        for text in ["appl3", "app e", "appl!", "ap-le"] {
            assert_eq!(Word::new(text), Err(WordError::InvalidCharacters), "{text}");
        }
    }

    #[test]
    fn word_letter_lookups() {
        let word = Word::new("flame").unwrap();
        assert_eq!(word.letter_at(0), 'f');
        assert_eq!(word.letter_at(4), 'e');

        assert!(word.contains('l'));
        assert!(!word.contains('z'));
        assert!(!word.contains('-'));
        assert!(!word.contains('é'));
    }

    #[test]
    fn word_equality_ignores_input_case() {
        assert_eq!(Word::new("table").unwrap(), Word::new("TABLE").unwrap());
        assert_ne!(Word::new("table").unwrap(), Word::new("chair").unwrap());
    }
}
