//! Terminal summary of a finished game

use serde::{Deserialize, Serialize};

/// Immutable summary handed to the history sink once a game ends
///
/// Serializes as `{"target": "CAT", "guesses": ["C", "Z"], "remainingAttempts": 5}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    target: String,
    guesses: Vec<char>,
    remaining_attempts: u32,
}

impl GameRecord {
    pub(crate) const fn new(target: String, guesses: Vec<char>, remaining_attempts: u32) -> Self {
        Self {
            target,
            guesses,
            remaining_attempts,
        }
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Accepted guesses in submission order, without duplicates
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[char] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    /// Whether every letter of the target appears among the guesses
    #[must_use]
    pub fn solved(&self) -> bool {
        self.target.chars().all(|c| self.guesses.contains(&c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_expected_field_names() {
        let record = GameRecord::new("CAT".to_string(), vec!['C', 'Z', 'A', 'T'], 5);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "target": "CAT",
                "guesses": ["C", "Z", "A", "T"],
                "remainingAttempts": 5
            })
        );
    }

    #[test]
    fn deserializes_saved_document() {
        let json = r#"{"target":"GO","guesses":["X"],"remainingAttempts":0}"#;
        let record: GameRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.target(), "GO");
        assert_eq!(record.guesses(), &['X']);
        assert_eq!(record.remaining_attempts(), 0);
        assert!(!record.solved());
    }

    #[test]
    fn solved_requires_every_letter() {
        let won = GameRecord::new("CAT".to_string(), vec!['T', 'A', 'C'], 6);
        let lost = GameRecord::new("CAT".to_string(), vec!['C', 'A', 'X'], 0);

        assert!(won.solved());
        assert!(!lost.solved());
    }
}
