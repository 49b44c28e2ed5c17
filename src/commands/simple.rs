//! Simple line-based game mode
//!
//! Text-based play without the TUI. One line of input per action.

use crate::core::MAX_ATTEMPTS;
use crate::game::{Game, Statistics};
use crate::output::{write_board, write_outcome, write_statistics};
use std::io::{self, BufRead, Write};

/// Run the line-based game until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    game: &mut Game,
    stats: &mut Statistics,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════╗")?;
    writeln!(out, "║          Wordle - Simple Mode        ║")?;
    writeln!(out, "╚══════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the hidden five-letter word in six tries.")?;
    writeln!(out, "  🟩 right letter, right spot")?;
    writeln!(out, "  🟨 letter is in the word")?;
    writeln!(out, "  ⬜ letter is not in the word\n")?;
    writeln!(out, "Commands: 'new' for a new game, 'quit' to exit")?;

    write_board(out, game)?;

    loop {
        let prompt = format!("Guess {}/{MAX_ATTEMPTS}", game.guesses().len() + 1);
        let Some(line) = read_line(&mut input, out, &prompt)? else {
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                game.new_game();
                writeln!(out, "\n🔄 New game started!")?;
                write_board(out, game)?;
                continue;
            }
            guess => {
                if !game.submit_guess(guess).is_accepted() {
                    continue;
                }
            }
        }

        write_board(out, game)?;

        let status = game.status();
        if !status.is_finished() {
            continue;
        }

        stats.record(status, game.guesses().len());
        write_outcome(out, game)?;
        write_statistics(out, stats)?;

        match read_line(&mut input, out, "Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                game.new_game();
                writeln!(out, "\n🔄 New game started!")?;
                write_board(out, game)?;
            }
            _ => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
        }
    }
}

/// Prompt and read one trimmed line, `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStatus, Vocabulary};
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn apple_game() -> Game {
        Game::from_seed(Vocabulary::new(words_from_slice(&["apple"])).unwrap(), 5)
    }

    fn play(game: &mut Game, stats: &mut Statistics, script: &str) -> String {
        let mut out = Vec::new();
        run_simple(game, stats, Cursor::new(script.as_bytes()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn win_then_decline_replay() {
        let mut game = apple_game();
        let mut stats = Statistics::default();

        let text = play(&mut game, &mut stats, "grape\napple\nno\n");

        assert!(text.contains("You Won!"));
        assert!(text.contains("Thanks for playing"));
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[2], 1);
    }

    #[test]
    fn loss_reveals_word_and_replay_starts_fresh() {
        let mut game = apple_game();
        let mut stats = Statistics::default();

        let script = "table\nchair\ngrape\nbrick\nflame\ncrane\nyes\n";
        let text = play(&mut game, &mut stats, script);

        assert!(text.contains("You Lost! Word: APPLE"));
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 0);
        // Input ended after the replay answer
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn rejected_lines_are_ignored() {
        let mut game = apple_game();
        let mut stats = Statistics::default();

        play(&mut game, &mut stats, "grape\ngrape\ntoolong\nab\n\n");

        assert_eq!(game.guesses().len(), 1);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(stats.games_played, 0);
    }

    #[test]
    fn non_letter_lines_are_played() {
        let mut game = apple_game();
        let mut stats = Statistics::default();

        let text = play(&mut game, &mut stats, "12345
ap-le
");

        assert_eq!(game.guesses().len(), 2);
        assert!(text.contains("⬜⬜⬜⬜⬜"));
        assert!(text.contains("🟩🟩⬜🟩🟩"));
        assert!(text.contains("Guess 3/6: "));
    }

    #[test]
    fn new_command_resets_game() {
        let mut game = apple_game();
        let mut stats = Statistics::default();

        let text = play(&mut game, &mut stats, "grape\nnew\n");

        assert!(text.contains("New game started"));
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn quit_stops_reading() {
        let mut game = apple_game();
        let mut stats = Statistics::default();

        play(&mut game, &mut stats, "quit\napple\n");

        assert!(game.guesses().is_empty());
    }

    #[test]
    fn prompt_counts_attempts() {
        let mut game = apple_game();
        let mut stats = Statistics::default();

        let text = play(&mut game, &mut stats, "grape\n");

        assert!(text.contains("Guess 1/6: "));
        assert!(text.contains("Guess 2/6: "));
    }
}
