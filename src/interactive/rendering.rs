//! TUI rendering with ratatui
//!
//! Board, keyboard and message panels for the daily game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Color as Tile, WORD_LEN, Word};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and keyboard
            Constraint::Percentage(45), // Progress and messages
        ])
        .split(chunks[1]);

    render_play_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.is_daily {
        "☕ WORDLE CAFE - Daily Word"
    } else {
        "☕ WORDLE CAFE - Practice"
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_play_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(board_height(app.game.max_attempts())),
            Constraint::Length(5), // Keyboard
            Constraint::Min(0),
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

/// One row per attempt plus the borders
fn board_height(max_attempts: usize) -> u16 {
    u16::try_from(max_attempts)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

fn tile_style(tile: Tile) -> Style {
    let bg = match tile {
        Tile::Green => Color::Green,
        Tile::Yellow => Color::Yellow,
        Tile::Gray => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn scored_row(word: &Word, tiles: &[Tile; WORD_LEN]) -> Line<'static> {
    let spans: Vec<Span> = word
        .chars()
        .iter()
        .zip(tiles)
        .map(|(&letter, &tile)| Span::styled(format!(" {} ", char::from(letter)), tile_style(tile)))
        .collect();
    Line::from(spans)
}

fn pending_row(typed: &str) -> Line<'static> {
    let typed = typed.chars().map(Some).chain(std::iter::repeat(None));
    let spans: Vec<Span> = typed
        .take(WORD_LEN)
        .map(|c| match c {
            Some(c) => Span::styled(
                format!(" {c} "),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
        })
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let attempts = app.game.attempts();
    let mut lines: Vec<Line> = attempts
        .iter()
        .map(|attempt| scored_row(&attempt.guess, attempt.feedback.colors()))
        .collect();

    if app.input_mode == InputMode::Guessing {
        lines.push(pending_row(&app.input_buffer));
    }
    while lines.len() < app.game.max_attempts() {
        lines.push(pending_row(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| {
                    let style = app.letter_state(letter).map_or_else(
                        || Style::default().fg(Color::White),
                        tile_style,
                    );
                    Span::styled(format!(" {} ", char::from(letter)), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(9), // Distribution
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_attempts_gauge(f, app, chunks[0]);
    render_distribution(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts_gauge(f: &mut Frame, app: &App, area: Rect) {
    let used = app.game.attempts().len();
    let max = app.game.max_attempts().max(1);
    let pct = (used * 100 / max).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Used ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(pct)
        .label(format!("{used}/{max} | {} left", app.game.remaining()));

    f.render_widget(gauge, area);
}

fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let dist = &app.stats.guess_distribution;
    let peak = dist.iter().copied().max().unwrap_or(0).max(1);

    let items: Vec<ListItem> = dist
        .iter()
        .enumerate()
        .skip(1)
        .map(|(guesses, &count)| {
            let bar_len = count * 16 / peak;
            ListItem::new(format!("{guesses}: {} {count}", "█".repeat(bar_len)))
                .style(Style::default().fg(Color::Green))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guessing => (
            " Type your guess | Enter to submit | Backspace to erase ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::GameOver => (
            " Game over | Press 'n' for a practice word or 'q' to quit ",
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let mode_text = if app.is_daily {
        "Mode: Daily"
    } else {
        "Mode: Practice"
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "Esc: Quit | Enter: Submit",
        InputMode::GameOver => "q: Quit | n: Practice",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_height_saturates() {
        assert_eq!(board_height(6), 8);
        assert_eq!(board_height(usize::from(u16::MAX)), u16::MAX);
        assert_eq!(board_height(1 << 20), u16::MAX);
    }
}
