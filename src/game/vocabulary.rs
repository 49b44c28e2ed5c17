//! Secret word vocabulary

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Fixed, non-empty set of words the secret is drawn from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<Word>,
}

/// Error type for unusable vocabularies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    Empty,
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Vocabulary must contain at least one word"),
        }
    }
}

impl std::error::Error for VocabularyError {}

impl Vocabulary {
    /// Build a vocabulary, dropping repeated words
    ///
    /// # Errors
    /// Returns `VocabularyError::Empty` if no words are given.
    pub fn new(words: Vec<Word>) -> Result<Self, VocabularyError> {
        let mut unique: Vec<Word> = Vec::with_capacity(words.len());
        for word in words {
            if !unique.contains(&word) {
                unique.push(word);
            }
        }

        if unique.is_empty() {
            return Err(VocabularyError::Empty);
        }

        Ok(Self { words: unique })
    }

    /// Pick a word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Non-empty by construction
        self.words.choose(rng).unwrap_or(&self.words[0])
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
