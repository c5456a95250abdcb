//! Hangman game session state machine
//!
//! A `GameSession` owns the target word, the guessed letters, the ordered
//! guess log and the attempt counter. It is mutated only through
//! [`GameSession::submit_guess`] and never performs I/O; presenters read it
//! through [`GameSession::render`].

use super::guess::{GuessOutcome, parse_guess};
use super::record::GameRecord;
use super::word::TargetWord;
use rustc_hash::FxHashSet;
use std::cell::OnceCell;
use std::fmt;

/// Attempt budget used when none is configured
pub const DEFAULT_ATTEMPTS: u32 = 6;

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Solved,
    Lost,
}

impl GameState {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Contract violations and configuration errors for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// A session needs at least one attempt
    ZeroAttemptBudget,
    /// A guess was submitted after the game ended
    Terminated,
    /// A record was requested before the game ended
    NotFinished,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroAttemptBudget => write!(f, "Attempt budget must be at least 1"),
            Self::Terminated => write!(f, "Game is already over; no more guesses are accepted"),
            Self::NotFinished => write!(f, "Game is still in progress"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Read-only snapshot of the board for presenters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// One slot per target position: the letter if revealed, `None` otherwise
    pub slots: Vec<Option<char>>,
    pub remaining_attempts: u32,
    pub attempt_budget: u32,
    /// `attempt_budget - remaining_attempts`, used to pick the gallows drawing
    pub stage: u32,
    pub state: GameState,
    /// Incorrect letters in the order they were guessed
    pub missed_letters: Vec<char>,
}

impl BoardView {
    /// Placeholder shown for unrevealed positions
    pub const PLACEHOLDER: char = '_';

    /// Revealed pattern with spaces between positions, e.g. `"C _ _"`
    #[must_use]
    pub fn pattern(&self) -> String {
        let mut out = String::with_capacity(self.slots.len() * 2);
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(slot.unwrap_or(Self::PLACEHOLDER));
        }
        out
    }
}

/// A single game of hangman
#[derive(Debug, Clone)]
pub struct GameSession {
    target: TargetWord,
    guessed_letters: FxHashSet<char>,
    guess_log: Vec<char>,
    attempt_budget: u32,
    remaining_attempts: u32,
    record: OnceCell<GameRecord>,
}

impl GameSession {
    /// Start a new game
    ///
    /// # Errors
    /// Returns `SessionError::ZeroAttemptBudget` if `attempt_budget` is 0.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameSession, GuessOutcome, TargetWord};
    ///
    /// let mut session = GameSession::new(TargetWord::new("cat").unwrap(), 6).unwrap();
    /// assert_eq!(session.submit_guess("c").unwrap(), GuessOutcome::Hit('C'));
    /// assert_eq!(session.render().pattern(), "C _ _");
    /// ```
    pub fn new(target: TargetWord, attempt_budget: u32) -> Result<Self, SessionError> {
        if attempt_budget == 0 {
            return Err(SessionError::ZeroAttemptBudget);
        }

        Ok(Self {
            target,
            guessed_letters: FxHashSet::default(),
            guess_log: Vec::new(),
            attempt_budget,
            remaining_attempts: attempt_budget,
            record: OnceCell::new(),
        })
    }

    /// Start a new game with [`DEFAULT_ATTEMPTS`]
    #[must_use]
    pub fn with_default_budget(target: TargetWord) -> Self {
        Self {
            target,
            guessed_letters: FxHashSet::default(),
            guess_log: Vec::new(),
            attempt_budget: DEFAULT_ATTEMPTS,
            remaining_attempts: DEFAULT_ATTEMPTS,
            record: OnceCell::new(),
        }
    }

    /// Apply one raw line of player input
    ///
    /// Format and duplicate rejections are reported as outcomes and leave the
    /// session untouched.
    ///
    /// # Errors
    /// Returns `SessionError::Terminated` if the game has already ended.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, SessionError> {
        if self.is_terminal() {
            return Err(SessionError::Terminated);
        }

        let letter = match parse_guess(raw) {
            Ok(letter) => letter,
            Err(err) => {
                tracing::debug!(input = raw, error = %err, "rejected guess");
                return Ok(GuessOutcome::InvalidFormat(err));
            }
        };

        if !self.guessed_letters.insert(letter) {
            tracing::debug!(%letter, "letter already guessed");
            return Ok(GuessOutcome::AlreadyGuessed(letter));
        }
        self.guess_log.push(letter);

        let outcome = if self.target.contains(letter) {
            GuessOutcome::Hit(letter)
        } else {
            self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
            GuessOutcome::Miss(letter)
        };

        tracing::debug!(
            %letter,
            ?outcome,
            remaining = self.remaining_attempts,
            "guess applied"
        );

        match self.state() {
            GameState::Solved => tracing::info!(
                target_word = %self.target,
                guesses = self.guess_log.len(),
                "word solved"
            ),
            GameState::Lost => tracing::info!(target_word = %self.target, "attempts exhausted"),
            GameState::InProgress => {}
        }

        Ok(outcome)
    }

    /// Current lifecycle state, derived from the board
    #[must_use]
    pub fn state(&self) -> GameState {
        if self.is_solved() {
            GameState::Solved
        } else if self.remaining_attempts == 0 {
            GameState::Lost
        } else {
            GameState::InProgress
        }
    }

    /// Every letter of the target has been guessed
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.target.distinct_letters().is_subset(&self.guessed_letters)
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.state() == GameState::Lost
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state().is_terminal()
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &TargetWord {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    #[inline]
    #[must_use]
    pub const fn attempt_budget(&self) -> u32 {
        self.attempt_budget
    }

    /// Accepted guesses in submission order
    #[inline]
    #[must_use]
    pub fn guess_log(&self) -> &[char] {
        &self.guess_log
    }

    #[inline]
    #[must_use]
    pub const fn guessed_letters(&self) -> &FxHashSet<char> {
        &self.guessed_letters
    }

    /// Snapshot of the board for display
    #[must_use]
    pub fn render(&self) -> BoardView {
        let slots = self
            .target
            .letters()
            .iter()
            .map(|&c| self.guessed_letters.contains(&c).then_some(c))
            .collect();

        let missed_letters = self
            .guess_log
            .iter()
            .copied()
            .filter(|&c| !self.target.contains(c))
            .collect();

        let stage = self
            .attempt_budget
            .saturating_sub(self.remaining_attempts)
            .min(self.attempt_budget);

        BoardView {
            slots,
            remaining_attempts: self.remaining_attempts,
            attempt_budget: self.attempt_budget,
            stage,
            state: self.state(),
            missed_letters,
        }
    }

    /// Produce the terminal record
    ///
    /// The record is built on the first successful call and the same record
    /// is returned afterwards.
    ///
    /// # Errors
    /// Returns `SessionError::NotFinished` while the game is in progress.
    pub fn finalize(&self) -> Result<&GameRecord, SessionError> {
        if !self.is_terminal() {
            return Err(SessionError::NotFinished);
        }

        Ok(self.record.get_or_init(|| {
            GameRecord::new(
                self.target.text().to_string(),
                self.guess_log.clone(),
                self.remaining_attempts,
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuessError;
    use proptest::prelude::*;

    fn session(word: &str, budget: u32) -> GameSession {
        GameSession::new(TargetWord::new(word).unwrap(), budget).unwrap()
    }

    #[test]
    fn new_session_in_progress() {
        let game = session("cat", 6);
        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.remaining_attempts(), 6);
        assert_eq!(game.attempt_budget(), 6);
        assert!(game.guess_log().is_empty());
    }

    #[test]
    fn zero_budget_rejected() {
        let result = GameSession::new(TargetWord::new("cat").unwrap(), 0);
        assert_eq!(result.unwrap_err(), SessionError::ZeroAttemptBudget);
    }

    #[test]
    fn default_budget_is_six() {
        let game = GameSession::with_default_budget(TargetWord::new("cat").unwrap());
        assert_eq!(game.attempt_budget(), DEFAULT_ATTEMPTS);
        assert_eq!(game.remaining_attempts(), 6);
    }

    #[test]
    fn cat_walkthrough() {
        let mut game = session("CAT", 6);

        assert_eq!(game.submit_guess("C").unwrap(), GuessOutcome::Hit('C'));
        assert_eq!(game.render().pattern(), "C _ _");
        assert_eq!(game.remaining_attempts(), 6);

        assert_eq!(game.submit_guess("Z").unwrap(), GuessOutcome::Miss('Z'));
        assert_eq!(game.remaining_attempts(), 5);

        assert_eq!(
            game.submit_guess("C").unwrap(),
            GuessOutcome::AlreadyGuessed('C')
        );
        assert_eq!(game.remaining_attempts(), 5);

        assert_eq!(game.submit_guess("A").unwrap(), GuessOutcome::Hit('A'));
        assert_eq!(game.submit_guess("T").unwrap(), GuessOutcome::Hit('T'));
        assert_eq!(game.state(), GameState::Solved);

        let record = game.finalize().unwrap();
        assert_eq!(record.target(), "CAT");
        assert_eq!(record.guesses(), &['C', 'Z', 'A', 'T']);
        assert_eq!(record.remaining_attempts(), 5);
    }

    #[test]
    fn single_attempt_loss() {
        let mut game = session("GO", 1);

        assert_eq!(game.submit_guess("x").unwrap(), GuessOutcome::Miss('X'));
        assert_eq!(game.state(), GameState::Lost);
        assert!(game.is_lost());

        let record = game.finalize().unwrap();
        assert_eq!(record.target(), "GO");
        assert_eq!(record.guesses(), &['X']);
        assert_eq!(record.remaining_attempts(), 0);
    }

    #[test]
    fn invalid_input_changes_nothing() {
        let mut game = session("cat", 6);

        for raw in ["", "ab", "1", "!", " "] {
            let outcome = game.submit_guess(raw).unwrap();
            assert!(matches!(outcome, GuessOutcome::InvalidFormat(_)), "{raw:?}");
        }

        assert_eq!(
            game.submit_guess("").unwrap(),
            GuessOutcome::InvalidFormat(GuessError::Empty)
        );
        assert_eq!(game.remaining_attempts(), 6);
        assert!(game.guess_log().is_empty());
        assert!(game.guessed_letters().is_empty());
    }

    #[test]
    fn case_insensitive_guesses() {
        let mut game = session("Cat", 6);
        assert_eq!(game.submit_guess("a").unwrap(), GuessOutcome::Hit('A'));
        assert_eq!(
            game.submit_guess("A").unwrap(),
            GuessOutcome::AlreadyGuessed('A')
        );
    }

    #[test]
    fn repeated_miss_not_charged_twice() {
        let mut game = session("cat", 6);
        game.submit_guess("q").unwrap();
        assert_eq!(
            game.submit_guess("q").unwrap(),
            GuessOutcome::AlreadyGuessed('Q')
        );
        assert_eq!(game.remaining_attempts(), 5);
        assert_eq!(game.guess_log(), &['Q']);
    }

    #[test]
    fn solved_once_each_distinct_letter_is_guessed() {
        let mut game = session("banana", 6);
        game.submit_guess("n").unwrap();
        game.submit_guess("a").unwrap();
        assert!(!game.is_solved());
        game.submit_guess("b").unwrap();
        assert!(game.is_solved());
        assert_eq!(game.guess_log().len(), 3);
    }

    #[test]
    fn hit_reveals_every_occurrence() {
        let mut game = session("banana", 6);
        assert_eq!(game.submit_guess("a").unwrap(), GuessOutcome::Hit('A'));
        assert_eq!(game.render().pattern(), "_ A _ A _ A");
        assert_eq!(game.remaining_attempts(), 6);
    }

    #[test]
    fn guess_after_solved_fails() {
        let mut game = session("a", 6);
        game.submit_guess("a").unwrap();
        assert_eq!(game.submit_guess("b"), Err(SessionError::Terminated));
        assert_eq!(game.submit_guess("!"), Err(SessionError::Terminated));
    }

    #[test]
    fn guess_after_lost_fails() {
        let mut game = session("a", 1);
        game.submit_guess("b").unwrap();
        assert_eq!(game.submit_guess("a"), Err(SessionError::Terminated));
        assert_eq!(game.guess_log(), &['B']);
    }

    #[test]
    fn finalize_before_end_fails() {
        let mut game = session("cat", 6);
        assert_eq!(game.finalize(), Err(SessionError::NotFinished));
        game.submit_guess("c").unwrap();
        assert_eq!(game.finalize(), Err(SessionError::NotFinished));
    }

    #[test]
    fn finalize_is_idempotent() {
        let mut game = session("go", 2);
        game.submit_guess("g").unwrap();
        game.submit_guess("o").unwrap();

        let first = game.finalize().unwrap().clone();
        let second = game.finalize().unwrap();
        assert_eq!(&first, second);
        assert!(std::ptr::eq(game.finalize().unwrap(), second));
    }

    #[test]
    fn render_tracks_stage_and_misses() {
        let mut game = session("cat", 4);
        game.submit_guess("x").unwrap();
        game.submit_guess("c").unwrap();
        game.submit_guess("y").unwrap();

        let view = game.render();
        assert_eq!(view.slots, vec![Some('C'), None, None]);
        assert_eq!(view.remaining_attempts, 2);
        assert_eq!(view.attempt_budget, 4);
        assert_eq!(view.stage, 2);
        assert_eq!(view.missed_letters, vec!['X', 'Y']);
        assert_eq!(view.state, GameState::InProgress);
    }

    #[test]
    fn render_final_stage_on_loss() {
        let mut game = session("cat", 2);
        game.submit_guess("x").unwrap();
        game.submit_guess("y").unwrap();

        let view = game.render();
        assert_eq!(view.stage, 2);
        assert_eq!(view.state, GameState::Lost);
        assert_eq!(view.pattern(), "_ _ _");
    }

    fn distinct_in_order(word: &str) -> Vec<char> {
        let mut seen = Vec::new();
        for c in word.chars() {
            if !seen.contains(&c) {
                seen.push(c);
            }
        }
        seen
    }

    proptest! {
        #[test]
        fn only_misses_lose_after_exact_budget(word in "[A-M]{1,8}", budget in 1u32..=13) {
            let mut game = session(&word, budget);
            let misses: Vec<char> = ('N'..='Z').collect();

            for (i, &letter) in misses.iter().take(budget as usize).enumerate() {
                prop_assert!(!game.is_terminal());
                prop_assert_eq!(game.submit_guess(&letter.to_string()).unwrap(), GuessOutcome::Miss(letter));
                prop_assert_eq!(game.remaining_attempts(), budget - i as u32 - 1);
            }

            prop_assert_eq!(game.state(), GameState::Lost);
            prop_assert_eq!(game.remaining_attempts(), 0);
        }

        #[test]
        fn every_distinct_letter_solves_without_misses(word in "[a-zA-Z]{1,12}", budget in 1u32..10) {
            let mut game = session(&word, budget);
            let letters = distinct_in_order(&word.to_uppercase());

            for (i, &letter) in letters.iter().enumerate() {
                prop_assert_eq!(game.submit_guess(&letter.to_string()).unwrap(), GuessOutcome::Hit(letter));
                prop_assert_eq!(game.is_solved(), i + 1 == letters.len());
            }

            prop_assert_eq!(game.state(), GameState::Solved);
            prop_assert_eq!(game.remaining_attempts(), budget);
        }

        #[test]
        fn arbitrary_inputs_keep_invariants(
            word in "[A-Z]{1,8}",
            budget in 1u32..8,
            inputs in proptest::collection::vec("[a-zA-Z0-9 ]{0,2}", 0..40),
        ) {
            let mut game = session(&word, budget);

            for raw in &inputs {
                if game.is_terminal() {
                    prop_assert_eq!(game.submit_guess(raw), Err(SessionError::Terminated));
                    break;
                }

                let before = game.remaining_attempts();
                let view = game.render();
                prop_assert_eq!(&view, &game.render());

                let outcome = game.submit_guess(raw).unwrap();
                match outcome {
                    GuessOutcome::Miss(_) => prop_assert_eq!(game.remaining_attempts(), before - 1),
                    _ => prop_assert_eq!(game.remaining_attempts(), before),
                }

                let log = game.guess_log();
                let unique: FxHashSet<char> = log.iter().copied().collect();
                prop_assert_eq!(unique.len(), log.len());
                prop_assert!(log.len() <= game.guessed_letters().len());
            }
        }
    }
}
