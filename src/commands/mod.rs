//! Command implementations

pub mod history;
pub mod play;
pub mod simple;

pub use history::last_game;
pub use play::{GameError, run_game};
pub use simple::run_simple;
