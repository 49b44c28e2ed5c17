//! Wordle Clone - CLI
//!
//! Guess the hidden five-letter word in six tries, in a TUI or a plain line-based mode.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_clone::{
    commands::{check_word, run_simple},
    game::{Game, Statistics, Vocabulary},
    interactive::{App, Theme, run_tui},
    logging::init_file_logging,
    output::print_check_result,
    wordlists::loader::{builtin, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_clone",
    about = "Guess the hidden five-letter word in six tries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default, 6 words) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed for reproducible secret words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Start the TUI in dark mode
    #[arg(long, global = true)]
    dark: bool,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Show the feedback for a guess against a given secret
    Check {
        /// The guessed word
        guess: String,

        /// The secret word to score against
        secret: String,
    },
}

/// Load the vocabulary based on the -w flag
fn load_vocabulary(wordlist: &str) -> Result<Vocabulary> {
    match wordlist {
        "builtin" => Ok(builtin()?),
        path => load_from_file(path),
    }
}

fn new_game(vocabulary: Vocabulary, seed: Option<u64>) -> Game {
    match seed {
        Some(seed) => Game::from_seed(vocabulary, seed),
        None => Game::from_entropy(vocabulary),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = cli
        .log_file
        .as_deref()
        .map(init_file_logging)
        .transpose()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let game = new_game(load_vocabulary(&cli.wordlist)?, cli.seed);
            let theme = if cli.dark { Theme::Dark } else { Theme::Light };
            run_tui(App::new(game, theme))
        }
        Commands::Simple => {
            let mut game = new_game(load_vocabulary(&cli.wordlist)?, cli.seed);
            let mut stats = Statistics::default();
            run_simple(&mut game, &mut stats, io::stdin().lock(), &mut io::stdout())?;
            Ok(())
        }
        Commands::Check { guess, secret } => {
            let result = check_word(&guess, &secret).map_err(|e| anyhow!(e))?;
            print_check_result(&result);
            Ok(())
        }
    }
}
