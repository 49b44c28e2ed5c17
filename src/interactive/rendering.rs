//! TUI rendering with ratatui
//!
//! The board, input and status panels, drawn in the active theme.

use super::app::{App, MessageStyle, Theme};
use crate::core::{Classification, WORD_LENGTH};
use crate::game::{Game, GameStatus, Row};
use crate::output::outcome_message;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub exact: Color,
    pub present: Color,
    pub absent: Color,
    pub tile_text: Color,
    pub blank: Color,
}

impl Palette {
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                foreground: Color::Black,
                accent: Color::Blue,
                exact: Color::Green,
                present: Color::Yellow,
                absent: Color::Gray,
                tile_text: Color::Black,
                blank: Color::Gray,
            },
            Theme::Dark => Self {
                background: Color::Black,
                foreground: Color::White,
                accent: Color::Cyan,
                exact: Color::Green,
                present: Color::Yellow,
                absent: Color::DarkGray,
                tile_text: Color::White,
                blank: Color::DarkGray,
            },
        }
    }

    #[must_use]
    pub const fn classification(&self, classification: Classification) -> Color {
        match classification {
            Classification::Exact => self.exact,
            Classification::Present => self.present,
            Classification::Absent => self.absent,
        }
    }

    fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme);

    f.render_widget(Block::default().style(palette.base()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Board and messages
            Constraint::Length(3), // Input or outcome
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, &palette, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, &app.game, &palette, main_chunks[0]);
    render_messages(f, app, &palette, main_chunks[1]);
    render_input(f, &app.game, &palette, chunks[2]);
    render_status(f, app, &palette, chunks[3]);
}

fn render_header(f: &mut Frame, palette: &Palette, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            palette
                .base()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(palette.base().fg(palette.accent)),
        );
    f.render_widget(header, area);
}

/// Lines of the 6x5 grid, with a spacer line between rows
#[must_use]
pub fn board_lines(game: &Game, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for row in game.rows() {
        let tiles: Vec<(String, Style)> = match row {
            Row::Submitted { guess, feedback } => guess
                .chars()
                .iter()
                .zip(feedback.classifications())
                .map(|(&letter, &classification)| {
                    let style = Style::default()
                        .fg(palette.tile_text)
                        .bg(palette.classification(classification))
                        .add_modifier(Modifier::BOLD);
                    (letter.to_ascii_uppercase().to_string(), style)
                })
                .collect(),
            Row::Input(input) => {
                let typed = Style::default()
                    .fg(palette.foreground)
                    .add_modifier(Modifier::BOLD);
                let mut tiles: Vec<(String, Style)> = input
                    .chars()
                    .map(|c| (c.to_ascii_uppercase().to_string(), typed))
                    .collect();
                tiles.resize(WORD_LENGTH, ("_".to_string(), Style::default().fg(palette.blank)));
                tiles
            }
            Row::Empty => vec![("·".to_string(), Style::default().fg(palette.blank)); WORD_LENGTH],
        };

        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for (i, (symbol, style)) in tiles.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!(" {symbol} "), style));
        }

        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    lines.pop();
    lines
}

fn render_board(f: &mut Frame, game: &Game, palette: &Palette, area: Rect) {
    let board = Paragraph::new(board_lines(game, palette))
        .alignment(Alignment::Center)
        .style(palette.base())
        .block(
            Block::default()
                .title(format!(" Board ({} left) ", game.remaining_attempts()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => palette.base(),
                MessageStyle::Success => palette.base().fg(Color::Green),
                MessageStyle::Error => palette.base().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list = List::new(messages)
        .style(palette.base())
        .block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, game: &Game, palette: &Palette, area: Rect) {
    let (title, content, color) = match outcome_message(game) {
        Some(message) => {
            let color = if game.status() == GameStatus::Won {
                Color::Green
            } else {
                Color::Red
            };
            (" Press 'n' for new game or 'q' to quit ", message, color)
        }
        None => (
            " Enter guess | Tab: theme | Ctrl-N: new game | Esc: quit ",
            game.input().to_uppercase(),
            palette.accent,
        ),
    };

    let input = Paragraph::new(content)
        .style(palette.base().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(palette.base().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Mode: {}", app.theme.label())).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let status = Paragraph::new(format!("Status: {}", app.game.status()))
        .alignment(Alignment::Center);
    f.render_widget(status, chunks[1]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[2]);

    let help = Paragraph::new("Tab: Theme | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.blank));
    f.render_widget(help, chunks[3]);
}
