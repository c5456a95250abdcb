//! Last-game history command

use crate::core::GameRecord;
use crate::history::{HistoryError, load_record};
use std::path::Path;

/// Load the record saved at `path`
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or not a game record.
pub fn last_game(path: &Path) -> Result<GameRecord, HistoryError> {
    let record = load_record(path)?;
    tracing::debug!(path = %path.display(), target_word = record.target(), "loaded game history");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameSession, TargetWord};
    use crate::history::{HistoryRecorder, JsonFileRecorder};

    #[test]
    fn reads_back_saved_game() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game_history.json");

        let mut game = GameSession::new(TargetWord::new("go").unwrap(), 1).unwrap();
        game.submit_guess("x").unwrap();
        let record = game.finalize().unwrap();
        JsonFileRecorder::new(&path).record_game(record).unwrap();

        let loaded = last_game(&path).unwrap();
        assert_eq!(&loaded, record);
        assert!(!loaded.solved());
    }
}
