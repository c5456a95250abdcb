//! Game history persistence
//!
//! A finished game's [`GameRecord`] is handed to a [`HistoryRecorder`] exactly
//! once. The default recorder overwrites a single JSON file per run.

use crate::core::GameRecord;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// File written when no other path is configured
pub const DEFAULT_HISTORY_FILE: &str = "game_history.json";

/// Failure to durably store or read back a game record
#[derive(Debug)]
pub enum HistoryError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, .. } => {
                write!(f, "Could not access history file {}", path.display())
            }
            Self::Json { path, .. } => {
                write!(f, "History file {} is not a valid game record", path.display())
            }
        }
    }
}

impl std::error::Error for HistoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/// Sink for finished games
pub trait HistoryRecorder {
    /// Make `record` durable
    ///
    /// # Errors
    /// Returns `HistoryError` if the record could not be written.
    fn record_game(&mut self, record: &GameRecord) -> Result<(), HistoryError>;
}

/// Writes each record as pretty-printed JSON to one file, replacing the
/// previous content
#[derive(Debug, Clone)]
pub struct JsonFileRecorder {
    path: PathBuf,
}

impl JsonFileRecorder {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for JsonFileRecorder {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_FILE)
    }
}

impl HistoryRecorder for JsonFileRecorder {
    fn record_game(&mut self, record: &GameRecord) -> Result<(), HistoryError> {
        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        write_record(&mut writer, record, &self.path)?;

        let file = writer
            .into_inner()
            .map_err(|e| self.io_error(e.into_error()))?;
        file.sync_all().map_err(|e| self.io_error(e))?;

        tracing::info!(path = %self.path.display(), target_word = record.target(), "game history saved");
        Ok(())
    }
}

/// Serialize `record` as pretty JSON plus a trailing newline
///
/// Failures of the underlying writer are reported as `Io`, not `Json`.
fn write_record<W: Write>(
    writer: &mut W,
    record: &GameRecord,
    path: &Path,
) -> Result<(), HistoryError> {
    serde_json::to_writer_pretty(&mut *writer, record).map_err(|source| {
        if source.is_io() {
            HistoryError::Io {
                path: path.to_path_buf(),
                source: io::Error::from(source),
            }
        } else {
            HistoryError::Json {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    writer.write_all(b"\n").map_err(|source| HistoryError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read back the record stored at `path`
///
/// # Errors
/// Returns `HistoryError` if the file cannot be read or does not hold a
/// game record.
pub fn load_record(path: impl AsRef<Path>) -> Result<GameRecord, HistoryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| HistoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| HistoryError::Json {
        path: path.to_path_buf(),
        source,
    })
}
