//! TUI application state and the terminal presenter

use crate::commands::{GameError, run_game};
use crate::core::{BoardView, GameRecord, GameSession, GuessOutcome, TargetWord};
use crate::history::HistoryRecorder;
use crate::output::Presenter;
use crate::output::formatters::feedback_message;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;

/// View model drawn by [`super::rendering::ui`]
pub struct App {
    pub board: Option<BoardView>,
    pub messages: Vec<Message>,
    pub input_buffer: String,
    pub input_mode: InputMode,
    pub result: Option<GameResult>,
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub solved: bool,
    pub target: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Maximum number of messages kept in the log
    pub const MESSAGE_LIMIT: usize = 5;

    #[must_use]
    pub fn new() -> Self {
        Self {
            board: None,
            messages: vec![
                Message {
                    text: "Welcome to the Hangman game!".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a letter and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            input_buffer: String::new(),
            input_mode: InputMode::Guessing,
            result: None,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > Self::MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    pub fn apply_feedback(&mut self, outcome: &GuessOutcome) {
        let style = match outcome {
            GuessOutcome::Hit(_) => MessageStyle::Success,
            GuessOutcome::AlreadyGuessed(_) => MessageStyle::Info,
            GuessOutcome::Miss(_) | GuessOutcome::InvalidFormat(_) => MessageStyle::Error,
        };
        self.add_message(&feedback_message(outcome), style);
    }

    pub fn finish(&mut self, solved: bool, target: &TargetWord) {
        self.input_mode = InputMode::GameOver;
        self.input_buffer.clear();
        self.result = Some(GameResult {
            solved,
            target: target.text().to_string(),
        });

        if solved {
            self.add_message(
                &format!("Congratulations! You've guessed the word: {target}"),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!("Game Over. The word was: {target}"),
                MessageStyle::Error,
            );
        }
        self.add_message("Press any key to exit.", MessageStyle::Info);
    }

    /// Take the typed line with surrounding whitespace removed, leaving the
    /// buffer empty
    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input_buffer).trim().to_string()
    }

    /// Append a typed character; chords with Ctrl or Alt are not text
    pub fn type_char(&mut self, c: char, modifiers: KeyModifiers) {
        if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            self.input_buffer.push(c);
        }
    }
}

/// Presenter that drives a ratatui terminal
pub struct TuiPresenter<'t, B: Backend> {
    terminal: &'t mut Terminal<B>,
    app: App,
}

impl<'t, B: Backend> TuiPresenter<'t, B> {
    pub fn new(terminal: &'t mut Terminal<B>) -> Self {
        Self {
            terminal,
            app: App::new(),
        }
    }

    #[must_use]
    pub const fn app(&self) -> &App {
        &self.app
    }

    fn draw(&mut self) -> io::Result<()> {
        let app = &self.app;
        self.terminal.draw(|f| super::rendering::ui(f, app))?;
        Ok(())
    }
}

impl<B: Backend> Presenter for TuiPresenter<'_, B> {
    fn show_status(&mut self, view: &BoardView) -> io::Result<()> {
        self.app.board = Some(view.clone());
        self.draw()
    }

    fn show_feedback(&mut self, outcome: &GuessOutcome) -> io::Result<()> {
        self.app.apply_feedback(outcome);
        self.draw()
    }

    fn read_guess(&mut self) -> io::Result<Option<String>> {
        loop {
            self.draw()?;

            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(None);
                    }
                    KeyCode::Esc => return Ok(None),
                    KeyCode::Enter => return Ok(Some(self.app.take_input())),
                    KeyCode::Char(c) => self.app.type_char(c, key.modifiers),
                    KeyCode::Backspace => {
                        self.app.input_buffer.pop();
                    }
                    _ => {}
                }
            }
        }
    }

    fn show_outcome(&mut self, solved: bool, target: &TargetWord) -> io::Result<()> {
        self.app.finish(solved, target);
        self.draw()?;

        loop {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                return Ok(());
            }
        }
    }
}

/// Run one game in the TUI
///
/// The terminal is restored before returning, whether the game finished,
/// was abandoned, or failed.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if input is closed
/// before the game ends, or if the history cannot be saved.
pub fn run_tui<H: HistoryRecorder + ?Sized>(
    session: &mut GameSession,
    recorder: &mut H,
) -> Result<GameRecord, GameError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = {
        let mut presenter = TuiPresenter::new(&mut terminal);
        run_game(session, &mut presenter, recorder)
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
