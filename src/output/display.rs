//! Display functions for game state and command results

use super::formatters::{colored_row, create_progress_bar};
use crate::commands::CheckResult;
use crate::core::{MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::{Game, GameStatus, Row, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Outcome line for a finished game, `None` while playing
#[must_use]
pub fn outcome_message(game: &Game) -> Option<String> {
    match game.status() {
        GameStatus::Playing => None,
        GameStatus::Won => Some("🎉 You Won!".to_string()),
        GameStatus::Lost => Some(format!(
            "😞 You Lost! Word: {}",
            game.secret().text().to_uppercase()
        )),
    }
}

/// Print the result of checking a guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().to_uppercase().bright_yellow().bold(),
        result.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_row(&result.guess, result.feedback));
    println!("  {}", result.feedback.to_emoji());
    println!(
        "\n  Exact: {}  Present: {}",
        result.feedback.count_exact().to_string().green(),
        result.feedback.count_present().to_string().yellow()
    );
}

/// Write the board, one line per attempt
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_board<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    writeln!(out)?;
    for row in game.rows() {
        match row {
            Row::Submitted { guess, feedback } => {
                writeln!(out, "  {}  {}", colored_row(&guess, feedback), feedback.to_emoji())?;
            }
            Row::Input(_) | Row::Empty => {
                writeln!(out, "  {}", " _ ".repeat(WORD_LENGTH).bright_black())?;
            }
        }
    }
    writeln!(out)
}

/// Write the outcome of a finished game
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_outcome<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    let Some(message) = outcome_message(game) else {
        return Ok(());
    };

    let styled = if game.status() == GameStatus::Won {
        message.bright_green().bold()
    } else {
        message.bright_red().bold()
    };

    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    writeln!(out, "  {styled}")?;
    writeln!(out, "{}", "═".repeat(40).bright_cyan())
}

/// Write the session statistics with a win distribution chart
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "\n📊 {}", "Statistics:".bright_cyan().bold())?;
    writeln!(out, "   Played:   {}", stats.games_played)?;
    writeln!(out, "   Win rate: {:.0}%", stats.win_rate())?;

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for attempts in 1..=MAX_ATTEMPTS {
        let count = stats.guess_distribution[attempts];
        let bar = create_progress_bar(count, most, 20);
        writeln!(out, "   {attempts}: {} {count}", bar.green())?;
    }
    writeln!(out)
}
