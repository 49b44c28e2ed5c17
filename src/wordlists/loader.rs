//! Word list loading utilities
//!
//! Builds a [`Vocabulary`] from the embedded list or from a word file.

use super::WORDS;
use crate::core::Word;
use crate::game::{Vocabulary, VocabularyError};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Blank lines and lines that are not valid words are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if it holds no valid words.
///
/// # Examples
/// ```no_run
/// use wordle_clone::wordlists::loader::load_from_file;
///
/// let vocabulary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", vocabulary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vocabulary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    let words = parse_words(&content);
    tracing::info!(path = %path.display(), count = words.len(), "loaded word list");

    Vocabulary::new(words).with_context(|| format!("word list {} is unusable", path.display()))
}

/// The built-in vocabulary
///
/// # Errors
///
/// Returns `VocabularyError::Empty` if the embedded list holds no valid words.
///
/// # Examples
/// ```
/// use wordle_clone::wordlists::loader::builtin;
///
/// let vocabulary = builtin().unwrap();
/// assert_eq!(vocabulary.len(), 6);
/// ```
pub fn builtin() -> Result<Vocabulary, VocabularyError> {
    Vocabulary::new(words_from_slice(WORDS))
}

/// Convert a string slice to a Word vector, skipping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}
