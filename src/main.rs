//! Hangman - CLI
//!
//! Console hangman with a TUI mode, a plain line-based mode and a saved
//! record of the last game.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{GameError, last_game, run_simple},
    config::GameConfig,
    core::{DEFAULT_ATTEMPTS, GameSession, TargetWord},
    history::DEFAULT_HISTORY_FILE,
    interactive::run_tui,
    logging,
    output::{
        print_farewell, print_history_saved, print_record, print_welcome, prompt_target_word,
    },
};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word to guess; prompted for when omitted
    #[arg(short, long, global = true)]
    word: Option<String>,

    /// Number of wrong guesses allowed
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    attempts: u32,

    /// File the finished game is written to (overwritten each run)
    #[arg(long, global = true, default_value = DEFAULT_HISTORY_FILE)]
    history_file: PathBuf,

    /// Do not clear the screen between turns (simple mode)
    #[arg(long, global = true)]
    no_clear: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show the last saved game
    History,
}

#[derive(Clone, Copy)]
enum Frontend {
    Tui,
    Console,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let config = GameConfig {
        attempts: cli.attempts,
        history_path: cli.history_file,
        clear_screen: !cli.no_clear,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(Frontend::Tui, cli.word.as_deref(), &config),
        Commands::Simple => run_play_command(Frontend::Console, cli.word.as_deref(), &config),
        Commands::History => run_history_command(&config.history_path),
    }
}

fn run_play_command(frontend: Frontend, word: Option<&str>, config: &GameConfig) -> Result<()> {
    print_welcome();

    let target = match word {
        Some(word) => TargetWord::new(word).context("Invalid word")?,
        None => prompt_target_word(io::stdin().lock(), io::stdout(), config.clear_screen)?,
    };

    let mut session = config.new_session(target)?;
    tracing::debug!(
        letters = session.target().len(),
        attempts = session.attempt_budget(),
        "game started"
    );

    match play(frontend, &mut session, config) {
        Ok(_) => {
            print_history_saved(&config.history_path);
            print_farewell();
            Ok(())
        }
        Err(GameError::InputClosed) => {
            println!("\nGame abandoned; no history saved.");
            Ok(())
        }
        Err(err @ GameError::Persistence(_)) => Err(err).with_context(|| {
            format!(
                "The game is over but its history was not saved to {}",
                config.history_path.display()
            )
        }),
        Err(err) => Err(err.into()),
    }
}

fn play(
    frontend: Frontend,
    session: &mut GameSession,
    config: &GameConfig,
) -> Result<(), GameError> {
    let mut recorder = config.recorder();
    match frontend {
        Frontend::Tui => run_tui(session, &mut recorder).map(|_| ()),
        Frontend::Console => run_simple(session, &mut recorder, config.clear_screen).map(|_| ()),
    }
}

fn run_history_command(path: &Path) -> Result<()> {
    let record = last_game(path)
        .with_context(|| format!("No saved game found at {}", path.display()))?;
    print_record(&record);
    Ok(())
}
