//! TUI application state and logic

use crate::core::{Color, WORD_LEN, Word};
use crate::game::{DailyGame, DailyStatus};
use crate::output::formatters::share_grid;
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::seq::IndexedRandom;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub answers: &'a [Word],
    pub game: DailyGame,
    /// False once a practice round replaces the daily word
    pub is_daily: bool,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index is the number of guesses taken
    pub guess_distribution: Vec<usize>,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: DailyGame, dictionary: &'a Dictionary, answers: &'a [Word]) -> Self {
        let stats = Statistics {
            guess_distribution: vec![0; game.max_attempts() + 1],
            ..Statistics::default()
        };
        Self {
            dictionary,
            answers,
            game,
            is_daily: true,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess today's 5-letter word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter. Esc quits.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats,
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    pub fn push_letter(&mut self, c: char) {
        if self.input_buffer.len() < WORD_LEN && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn pop_letter(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the typed word as a guess
    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.game.submit(&input, self.dictionary) {
            Ok(attempt) => {
                let emoji = attempt.feedback.to_emoji();
                let guess = attempt.guess.to_string();
                self.add_message(&format!("{guess} {emoji}"), MessageStyle::Info);
            }
            Err(rejection) => {
                // Keep the letters so the player can fix them
                self.input_buffer = input;
                self.add_message(&rejection.to_string(), MessageStyle::Error);
                return;
            }
        }

        match self.game.status() {
            DailyStatus::Won => {
                let guess_count = self.game.attempts().len();
                self.record_result(true, guess_count);

                let celebration = match guess_count {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.finish_game();
            }
            DailyStatus::Lost => {
                self.record_result(false, 0);
                let text = format!("Out of guesses. The word was {}.", self.game.target());
                self.add_message(&text, MessageStyle::Error);
                self.finish_game();
            }
            DailyStatus::InProgress => {}
        }
    }

    fn record_result(&mut self, won: bool, guess_count: usize) {
        self.stats.total_games += 1;
        if won {
            self.stats.games_won += 1;
            if let Some(slot) = self.stats.guess_distribution.get_mut(guess_count) {
                *slot += 1;
            }
        }
    }

    fn finish_game(&mut self) {
        self.input_mode = InputMode::GameOver;
        self.add_message("Press 'n' for a practice word or 'q' to quit.", MessageStyle::Info);
    }

    /// Start a practice game with a random answer
    pub fn new_game(&mut self) {
        let mut rng = rand::rng();
        let Some(target) = self.answers.choose(&mut rng).cloned() else {
            self.add_message("No answers loaded!", MessageStyle::Error);
            return;
        };

        self.game = DailyGame::with_max_attempts(target, self.game.max_attempts());
        self.is_daily = false;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("Practice game started! Guess the word.", MessageStyle::Info);
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

    /// Best known color for a letter across all attempts
    #[must_use]
    pub fn letter_state(&self, letter: u8) -> Option<Color> {
        self.game
            .attempts()
            .iter()
            .flat_map(|attempt| {
                attempt
                    .guess
                    .chars()
                    .iter()
                    .zip(attempt.feedback.colors())
                    .filter(|&(&l, _)| l == letter)
                    .map(|(_, &color)| color)
            })
            .max_by_key(|&color| match color {
                Color::Gray => 0,
                Color::Yellow => 1,
                Color::Green => 2,
            })
    }

    /// Emoji grid for the finished game
    #[must_use]
    pub fn share_text(&self) -> String {
        share_grid(self.game.attempts())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(Some(share)) => println!("{share}"),
        Ok(None) => {}
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

/// Event loop; returns the share grid if the last game finished
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                _ => match app.input_mode {
                    InputMode::GameOver => match key.code {
                        KeyCode::Char('q') => app.should_quit = true,
                        KeyCode::Char('n') => app.new_game(),
                        _ => {}
                    },
                    InputMode::Guessing => match key.code {
                        KeyCode::Char(c) => app.push_letter(c),
                        KeyCode::Backspace => app.pop_letter(),
                        KeyCode::Enter => app.submit_guess(),
                        _ => {}
                    },
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.game.is_over().then(|| app.share_text()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Dictionary, Vec<Word>) {
        let words: Vec<Word> = ["LATTE", "MOCHA", "SCONE", "TOAST", "BREAD", "HONEY", "SUGAR"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        (words.iter().cloned().collect(), words)
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.push_letter(c);
        }
        app.submit_guess();
    }

    #[test]
    fn input_is_limited_to_five_letters() {
        let (dictionary, answers) = fixture();
        let mut app = App::new(DailyGame::new(answers[2].clone()), &dictionary, &answers);

        for c in "sc0nees".chars() {
            app.push_letter(c);
        }
        assert_eq!(app.input_buffer, "SCNEE");
        app.pop_letter();
        assert_eq!(app.input_buffer, "SCNE");
    }

    #[test]
    fn rejected_guess_keeps_input() {
        let (dictionary, answers) = fixture();
        let mut app = App::new(DailyGame::new(answers[2].clone()), &dictionary, &answers);

        type_word(&mut app, "QUEUE");
        assert_eq!(app.input_buffer, "QUEUE");
        assert!(app.game.attempts().is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "Not in word list. Try again.");
    }

    #[test]
    fn winning_updates_stats() {
        let (dictionary, answers) = fixture();
        let mut app = App::new(DailyGame::new(answers[2].clone()), &dictionary, &answers);

        type_word(&mut app, "toast");
        type_word(&mut app, "scone");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert_eq!(app.share_text().lines().count(), 2);
    }

    #[test]
    fn distribution_covers_configured_attempts() {
        let (dictionary, answers) = fixture();
        let game = DailyGame::with_max_attempts(answers[6].clone(), 8);
        let mut app = App::new(game, &dictionary, &answers);
        assert_eq!(app.stats.guess_distribution.len(), 9);

        for word in ["LATTE", "MOCHA", "SCONE", "TOAST", "BREAD", "HONEY", "SUGAR"] {
            type_word(&mut app, word);
        }
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.guess_distribution[7], 1);
    }

    #[test]
    fn keyboard_state_prefers_best_color() {
        let (dictionary, answers) = fixture();
        let mut app = App::new(DailyGame::new(answers[2].clone()), &dictionary, &answers);

        // TOAST vs SCONE: O yellow, S yellow, T gray
        type_word(&mut app, "TOAST");
        assert_eq!(app.letter_state(b'O'), Some(Color::Yellow));
        assert_eq!(app.letter_state(b'T'), Some(Color::Gray));
        assert_eq!(app.letter_state(b'Z'), None);

        type_word(&mut app, "SCONE");
        assert_eq!(app.letter_state(b'O'), Some(Color::Green));
        assert_eq!(app.letter_state(b'T'), Some(Color::Gray));
    }

    #[test]
    fn new_game_is_practice() {
        let (dictionary, answers) = fixture();
        let mut app = App::new(DailyGame::new(answers[0].clone()), &dictionary, &answers);

        type_word(&mut app, "LATTE");
        app.new_game();
        assert!(!app.is_daily);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.game.attempts().is_empty());
        assert!(answers.contains(app.game.target()));
    }
}
