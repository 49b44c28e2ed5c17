//! Word lists for secret selection
//!
//! Provides the built-in vocabulary compiled into the binary, plus loading of custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
