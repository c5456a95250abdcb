//! Core domain types for hangman
//!
//! This module holds the game state machine and its value types. Nothing here
//! performs I/O; presenters and history sinks live outside `core`.

mod guess;
mod record;
mod session;
mod word;

pub use guess::{GuessError, GuessOutcome, parse_guess};
pub use record::GameRecord;
pub use session::{BoardView, DEFAULT_ATTEMPTS, GameSession, GameState, SessionError};
pub use word::{TargetWord, WordError};
