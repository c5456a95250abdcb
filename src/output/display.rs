//! Line-based console presenter and banner printing

use super::Presenter;
use super::formatters::{feedback_message, gallows, letter_list};
use crate::core::{BoardView, GameRecord, GuessOutcome, TargetWord};
use anyhow::{Result, bail};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Presenter that reads lines from `input` and writes colored text to `output`
pub struct ConsolePresenter<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
    pending_feedback: Option<GuessOutcome>,
}

impl<R: BufRead, W: Write> ConsolePresenter<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
            pending_feedback: None,
        }
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    // Feedback is held back until the next redraw so a screen clear does not
    // wipe it before the player can read it.
    fn flush_feedback(&mut self) -> io::Result<()> {
        if let Some(outcome) = self.pending_feedback.take() {
            let message = feedback_message(&outcome);
            let styled = match outcome {
                GuessOutcome::Hit(_) => message.green(),
                GuessOutcome::Miss(_) => message.yellow(),
                GuessOutcome::AlreadyGuessed(_) | GuessOutcome::InvalidFormat(_) => message.red(),
            };
            writeln!(self.output, "\n{styled}")?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Presenter for ConsolePresenter<R, W> {
    fn show_status(&mut self, view: &BoardView) -> io::Result<()> {
        self.clear()?;
        writeln!(self.output, "{}", gallows(view.stage, view.attempt_budget))?;
        writeln!(self.output)?;

        for slot in &view.slots {
            match slot {
                Some(letter) => write!(self.output, "{}", format!("{letter} ").green())?,
                None => write!(self.output, "{}", "_ ".red())?,
            }
        }
        writeln!(self.output)?;

        writeln!(
            self.output,
            "\nRemaining attempts: {}",
            view.remaining_attempts
        )?;
        if !view.missed_letters.is_empty() {
            writeln!(
                self.output,
                "Missed letters: {}",
                letter_list(&view.missed_letters)
            )?;
        }

        self.flush_feedback()
    }

    fn show_feedback(&mut self, outcome: &GuessOutcome) -> io::Result<()> {
        tracing::trace!(?outcome, "feedback queued");
        self.pending_feedback = Some(*outcome);
        Ok(())
    }

    fn read_guess(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "\nGuess a letter: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    fn show_outcome(&mut self, solved: bool, target: &TargetWord) -> io::Result<()> {
        self.clear()?;
        self.flush_feedback()?;
        writeln!(self.output)?;

        if solved {
            writeln!(
                self.output,
                "{} {}",
                "Congratulations! You've guessed the word:".green().bold(),
                target.text().bright_yellow().bold()
            )?;
        } else {
            writeln!(self.output, "{}", gallows(1, 1))?;
            writeln!(
                self.output,
                "{} {}",
                "Game Over. The word was:".red().bold(),
                target.text().bright_yellow().bold()
            )?;
        }

        self.output.flush()
    }
}

/// Ask for the word to guess until a valid one is entered
///
/// The screen is cleared afterwards (when `clear_screen` is set) so the
/// guessing player cannot read it.
///
/// # Errors
///
/// Returns an error if the console fails or input ends before a valid word
/// is entered.
pub fn prompt_target_word<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    clear_screen: bool,
) -> Result<TargetWord> {
    loop {
        write!(output, "Enter a word (hidden from player): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("Input closed before a word was entered");
        }

        match TargetWord::new(&line) {
            Ok(word) => {
                if clear_screen {
                    execute!(output, Clear(ClearType::All), MoveTo(0, 0))?;
                }
                return Ok(word);
            }
            Err(err) => writeln!(output, "{}", err.to_string().red())?,
        }
    }
}

/// Print the welcome banner
pub fn print_welcome() {
    println!("{}", "Welcome to the Hangman game!".bright_yellow().bold());
}

/// Confirm where the game history was written
pub fn print_history_saved(path: &Path) {
    println!("Game history saved to {}.", path.display());
}

/// Print the closing line
pub fn print_farewell() {
    println!("{}", "Thanks for playing Hangman!".bright_green().bold());
}

/// Print a stored game record
pub fn print_record(record: &GameRecord) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(" {} ", "LAST GAME".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());

    println!("   Word:               {}", record.target().bright_yellow().bold());
    println!("   Guesses:            {}", letter_list(record.guesses()));
    println!("   Remaining attempts: {}", record.remaining_attempts());

    if record.solved() {
        println!("   Result:             {}", "Solved".green().bold());
    } else {
        println!("   Result:             {}", "Lost".red().bold());
    }
}
