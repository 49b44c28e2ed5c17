//! Derived game status

use crate::core::{Guess, MAX_ATTEMPTS, Word};
use std::fmt;

/// Outcome state of a game
///
/// Never stored: always evaluated from the secret and the guess list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Evaluate the status of a game
    ///
    /// A match wins even when it is the last allowed attempt.
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{Guess, Word};
    /// use wordle_clone::game::GameStatus;
    ///
    /// let secret = Word::new("apple").unwrap();
    /// let guess = Guess::new("APPLE").unwrap();
    /// assert_eq!(GameStatus::evaluate(&secret, &[]), GameStatus::Playing);
    /// assert_eq!(GameStatus::evaluate(&secret, &[guess]), GameStatus::Won);
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guesses: &[Guess]) -> Self {
        if guesses.iter().any(|guess| guess.matches(secret)) {
            Self::Won
        } else if guesses.len() >= MAX_ATTEMPTS {
            Self::Lost
        } else {
            Self::Playing
        }
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Playing => "Playing",
            Self::Won => "Won",
            Self::Lost => "Lost",
        };
        f.write_str(label)
    }
}
