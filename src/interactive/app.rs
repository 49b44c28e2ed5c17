//! TUI application state and logic

use crate::game::{Game, GameStatus, Statistics, SubmitOutcome};
use crate::output::outcome_message;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Light or dark display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

/// Application state
pub struct App {
    pub game: Game,
    pub theme: Theme,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Set once the current game's result has been counted
    recorded: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(game: Game, theme: Theme) -> Self {
        Self {
            game,
            theme,
            messages: vec![
                Message {
                    text: "Guess the hidden five-letter word in six tries.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Enter to submit, Tab to switch theme.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            recorded: false,
        }
    }

    /// Route a key event to the matching action
    ///
    /// Only key presses are handled; releases and repeats are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.toggle_theme(),
            _ if self.game.status().is_finished() => match key.code {
                KeyCode::Char('n' | 'N') => self.new_game(),
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                _ => {}
            },
            KeyCode::Char(c) if !ctrl => {
                self.game.push_char(c);
            }
            KeyCode::Backspace => {
                self.game.pop_char();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    /// Submit the input buffer
    ///
    /// Rejected guesses are ignored without a message.
    pub fn submit(&mut self) {
        if let SubmitOutcome::Accepted(_) = self.game.submit_input() {
            self.finish_if_over();
        }
    }

    fn finish_if_over(&mut self) {
        let status = self.game.status();
        if !status.is_finished() || self.recorded {
            return;
        }

        self.recorded = true;
        self.stats.record(status, self.game.guesses().len());

        if let Some(text) = outcome_message(&self.game) {
            let style = if status == GameStatus::Won {
                MessageStyle::Success
            } else {
                MessageStyle::Error
            };
            self.add_message(&text, style);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.game.new_game();
        self.recorded = false;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = self.theme.label(), "theme toggled");
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal before reporting anything
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            tracing::info!(
                played = app.stats.games_played,
                won = app.stats.games_won,
                "session ended"
            );
            break;
        }
    }

    Ok(())
}
