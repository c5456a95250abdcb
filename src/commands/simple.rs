//! Simple line-based console mode
//!
//! Text-based game on stdin/stdout without the TUI

use super::play::{GameError, run_game};
use crate::core::{GameRecord, GameSession};
use crate::history::HistoryRecorder;
use crate::output::ConsolePresenter;
use std::io;

/// Run one game on the process console
///
/// # Errors
///
/// Returns an error if there's an I/O error on the console, input ends before
/// the game does, or the history cannot be saved.
pub fn run_simple<H: HistoryRecorder + ?Sized>(
    session: &mut GameSession,
    recorder: &mut H,
    clear_screen: bool,
) -> Result<GameRecord, GameError> {
    let stdin = io::stdin();
    let mut presenter = ConsolePresenter::new(stdin.lock(), io::stdout(), clear_screen);
    run_game(session, &mut presenter, recorder)
}
