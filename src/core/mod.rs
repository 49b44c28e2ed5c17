//! Core domain types for the game
//!
//! Vocabulary words, guesses and per-letter feedback. Everything here is pure and free of I/O.

mod feedback;
mod guess;
mod word;

pub use feedback::{Classification, Feedback};
pub use guess::{Guess, GuessLengthError};
pub use word::{Word, WordError};

/// Number of characters in every word and guess
pub const WORD_LENGTH: usize = 5;

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;
