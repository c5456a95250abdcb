//! Game configuration
//!
//! Collected from the command line in `main.rs`; defaults match a classic
//! six-miss game writing `game_history.json` in the working directory.

use crate::core::{DEFAULT_ATTEMPTS, GameSession, SessionError, TargetWord};
use crate::history::{DEFAULT_HISTORY_FILE, JsonFileRecorder};
use std::path::PathBuf;

/// Settings for one run of the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub attempts: u32,
    pub history_path: PathBuf,
    pub clear_screen: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            history_path: PathBuf::from(DEFAULT_HISTORY_FILE),
            clear_screen: true,
        }
    }
}

impl GameConfig {
    /// Start a session for `target` with the configured budget
    ///
    /// # Errors
    /// Returns `SessionError::ZeroAttemptBudget` if `attempts` is 0.
    pub fn new_session(&self, target: TargetWord) -> Result<GameSession, SessionError> {
        GameSession::new(target, self.attempts)
    }

    /// Recorder writing to the configured history file
    #[must_use]
    pub fn recorder(&self) -> JsonFileRecorder {
        JsonFileRecorder::new(&self.history_path)
    }
}
