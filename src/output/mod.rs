//! Terminal output formatting
//!
//! The [`Presenter`] trait is the only way the game loop talks to a player.
//! [`ConsolePresenter`] is the line-based implementation; the TUI one lives in
//! [`crate::interactive`].

pub mod display;
pub mod formatters;

use crate::core::{BoardView, GuessOutcome, TargetWord};
use std::io;

pub use display::{
    ConsolePresenter, print_farewell, print_history_saved, print_record, print_welcome,
    prompt_target_word,
};

/// Display and input capability used by the game loop
pub trait Presenter {
    /// Show the current board
    ///
    /// # Errors
    /// Returns an I/O error if the output cannot be written.
    fn show_status(&mut self, view: &BoardView) -> io::Result<()>;

    /// Report how the last input was handled
    ///
    /// # Errors
    /// Returns an I/O error if the output cannot be written.
    fn show_feedback(&mut self, outcome: &GuessOutcome) -> io::Result<()>;

    /// Block until the player enters one line
    ///
    /// Returns `None` once input is closed or the player asks to quit.
    ///
    /// # Errors
    /// Returns an I/O error if input cannot be read.
    fn read_guess(&mut self) -> io::Result<Option<String>>;

    /// Show the end of the game
    ///
    /// # Errors
    /// Returns an I/O error if the output cannot be written.
    fn show_outcome(&mut self, solved: bool, target: &TargetWord) -> io::Result<()>;
}
