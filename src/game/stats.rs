//! In-memory session statistics

use super::status::GameStatus;
use crate::core::MAX_ATTEMPTS;

/// Tally of finished games for the running process
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// Wins indexed by the number of guesses taken (index 0 unused)
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    /// Record a finished game
    ///
    /// Ignores games that are still being played.
    pub fn record(&mut self, status: GameStatus, attempts: usize) {
        match status {
            GameStatus::Playing => {}
            GameStatus::Won => {
                self.games_played += 1;
                self.games_won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(attempts) {
                    *slot += 1;
                }
            }
            GameStatus::Lost => self.games_played += 1,
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
