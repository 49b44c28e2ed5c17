//! Formatting utilities for terminal output

use crate::core::{Classification, Feedback, Guess};
use colored::{ColoredString, Colorize};

/// Format one letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, classification: Classification) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match classification {
        Classification::Exact => tile.black().on_green().bold(),
        Classification::Present => tile.black().on_yellow().bold(),
        Classification::Absent => tile.white().on_bright_black(),
    }
}

/// Format a scored guess as a row of colored tiles
#[must_use]
pub fn colored_row(guess: &Guess, feedback: Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.classifications())
        .map(|(&c, &classification)| letter_tile(c, classification).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn colored_row_keeps_letters_in_order() {
        colored::control::set_override(false);
        let guess = Guess::new("grape").unwrap();
        let secret = Word::new("apple").unwrap();
        let row = colored_row(&guess, Feedback::compute(&guess, &secret));
        assert_eq!(row, " G  R  A  P  E ");
    }

    #[test]
    fn colored_row_shows_non_letters() {
        colored::control::set_override(false);
        let guess = Guess::new("ap-l3").unwrap();
        let secret = Word::new("apple").unwrap();
        let row = colored_row(&guess, Feedback::compute(&guess, &secret));
        assert_eq!(row, " A  P  -  L  3 ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 10, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(10, 10, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(5, 10, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }
}
