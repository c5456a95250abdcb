//! The turn loop connecting a session, a presenter and a history sink

use crate::core::{GameRecord, GameSession, SessionError};
use crate::history::{HistoryError, HistoryRecorder};
use crate::output::Presenter;
use std::fmt;
use std::io;

/// Failures that end a game loop early or leave it unrecorded
#[derive(Debug)]
pub enum GameError {
    /// The presenter could not read or write
    Io(io::Error),
    /// Input ended before the game did
    InputClosed,
    /// The session rejected an operation
    Session(SessionError),
    /// The finished game could not be saved
    Persistence(HistoryError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(_) => write!(f, "Console I/O failed"),
            Self::InputClosed => write!(f, "Input closed before the game finished"),
            Self::Session(_) => write!(f, "Game session contract violated"),
            Self::Persistence(_) => write!(f, "Failed to save game history"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Session(err) => Some(err),
            Self::Persistence(err) => Some(err),
            Self::InputClosed => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<SessionError> for GameError {
    fn from(err: SessionError) -> Self {
        Self::Session(err)
    }
}

impl From<HistoryError> for GameError {
    fn from(err: HistoryError) -> Self {
        Self::Persistence(err)
    }
}

/// Play `session` to the end and record the result
///
/// Each turn shows the board, reads one line and applies it. Invalid and
/// repeated guesses are reported to the player and the loop continues. Once
/// the game ends the outcome is shown before the record is handed to
/// `recorder`, so a persistence failure never hides the result.
///
/// # Errors
///
/// Returns `GameError` if the presenter fails, input is closed early, the
/// session is already finished, or the record cannot be saved.
pub fn run_game<P, H>(
    session: &mut GameSession,
    presenter: &mut P,
    recorder: &mut H,
) -> Result<GameRecord, GameError>
where
    P: Presenter + ?Sized,
    H: HistoryRecorder + ?Sized,
{
    if session.is_terminal() {
        return Err(SessionError::Terminated.into());
    }

    while !session.is_terminal() {
        presenter.show_status(&session.render())?;

        let Some(line) = presenter.read_guess()? else {
            tracing::info!(guesses = session.guess_log().len(), "input closed mid-game");
            return Err(GameError::InputClosed);
        };

        let outcome = session.submit_guess(&line)?;
        if !outcome.is_applied() {
            tracing::debug!(?outcome, "guess not applied, prompting again");
        }
        presenter.show_feedback(&outcome)?;
    }

    // Final board, so the end screen shows the last guess
    presenter.show_status(&session.render())?;
    presenter.show_outcome(session.is_solved(), session.target())?;

    let record = session.finalize()?.clone();
    if let Err(err) = recorder.record_game(&record) {
        tracing::warn!(error = %err, "game history not saved");
        return Err(err.into());
    }

    Ok(record)
}
