//! Guess parsing and the outcome of a submitted guess

use std::fmt;

/// Why a raw guess was rejected before reaching the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    Empty,
    TooLong(usize),
    NotAlphabetic(char),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "No letter entered"),
            Self::TooLong(len) => write!(f, "Expected a single letter, got {len} characters"),
            Self::NotAlphabetic(ch) => write!(f, "'{ch}' is not a letter"),
        }
    }
}

impl std::error::Error for GuessError {}

/// Result of applying one raw input line to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs in the word; every occurrence is revealed
    Hit(char),
    /// The letter is absent; one attempt was consumed
    Miss(char),
    /// The letter was guessed before; nothing changed
    AlreadyGuessed(char),
    /// The input was not a single letter; nothing changed
    InvalidFormat(GuessError),
}

impl GuessOutcome {
    /// Whether the guess was applied to the board (hit or miss)
    #[inline]
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Hit(_) | Self::Miss(_))
    }
}

/// Normalize and validate a raw guess
///
/// The input is uppercased first, then must be exactly one alphabetic
/// character. No trimming happens here; presenters decide how raw lines
/// are cleaned up.
///
/// # Errors
/// Returns `GuessError` when the input is empty, longer than one character,
/// or not a letter.
///
/// # Examples
/// ```
/// use hangman::core::{parse_guess, GuessError};
///
/// assert_eq!(parse_guess("c"), Ok('C'));
/// assert_eq!(parse_guess("7"), Err(GuessError::NotAlphabetic('7')));
/// assert_eq!(parse_guess("ab"), Err(GuessError::TooLong(2)));
/// ```
pub fn parse_guess(raw: &str) -> Result<char, GuessError> {
    let normalized = raw.to_uppercase();
    let mut chars = normalized.chars();

    let Some(letter) = chars.next() else {
        return Err(GuessError::Empty);
    };

    let rest = chars.count();
    if rest > 0 {
        return Err(GuessError::TooLong(rest + 1));
    }

    if !letter.is_alphabetic() {
        return Err(GuessError::NotAlphabetic(letter));
    }

    Ok(letter)
}
