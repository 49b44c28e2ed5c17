//! Feedback check command
//!
//! Scores one guess against a given secret without starting a game.

use crate::core::{Feedback, Guess, Word};

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Guess,
    pub secret: Word,
    pub feedback: Feedback,
}

/// Compute the feedback for `guess` against `secret`
///
/// # Errors
///
/// Returns an error if the guess is not 5 characters long or the secret is
/// not a valid 5-letter word.
pub fn check_word(guess: &str, secret: &str) -> Result<CheckResult, String> {
    let guess = Guess::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let feedback = Feedback::compute(&guess, &secret);

    Ok(CheckResult {
        guess,
        secret,
        feedback,
    })
}
