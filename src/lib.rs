//! Wordle Clone
//!
//! A word-guessing game: find the hidden five-letter word in six tries, with
//! per-letter feedback after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_clone::core::{Classification, Word};
//! use wordle_clone::game::{Game, GameStatus, SubmitOutcome, Vocabulary};
//!
//! let vocabulary = Vocabulary::new(vec![Word::new("apple").unwrap()]).unwrap();
//! let mut game = Game::from_seed(vocabulary, 42);
//!
//! if let SubmitOutcome::Accepted(feedback) = game.submit_guess("grape") {
//!     assert_eq!(feedback.classifications()[4], Classification::Exact);
//! }
//! assert_eq!(game.status(), GameStatus::Playing);
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// File logging
pub mod logging;
