//! Interactive TUI interface

pub mod app;
pub mod rendering;

pub use app::{App, TuiPresenter, run_tui};
