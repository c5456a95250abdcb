//! Hangman
//!
//! A console word-guessing game: the player uncovers a hidden word one letter
//! at a time and loses an attempt for every wrong letter. The finished game is
//! saved as a JSON record.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameSession, GameState, TargetWord};
//!
//! let mut session = GameSession::with_default_budget(TargetWord::new("go").unwrap());
//! session.submit_guess("g").unwrap();
//! session.submit_guess("o").unwrap();
//!
//! assert_eq!(session.state(), GameState::Solved);
//! let record = session.finalize().unwrap();
//! assert_eq!(record.guesses(), &['G', 'O']);
//! assert_eq!(record.remaining_attempts(), 6);
//! ```

// Core domain types
pub mod core;

// Game history persistence
pub mod history;

// Command implementations
pub mod commands;

// Run configuration
pub mod config;

// Tracing setup
pub mod logging;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
