//! Strictly Minimax - terminal tic-tac-toe
//!
//! The human plays X on stdin/stdout; the computer plays O using a
//! game-tree search.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use strictly_minimax::{
    Board, ComputerPlayer, GameConfig, HumanPlayer, Orchestrator, Side, Strategy, StrategyKind,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => run_game(None, false, None),
        Some(Command::Play {
            strategy,
            computer_first,
            config,
        }) => run_game(strategy, computer_first, config),
        Some(Command::BestMove { board, strategy }) => run_best_move(&board, strategy),
    }
}

/// Run an interactive game on the terminal
#[instrument]
fn run_game(
    strategy: Option<StrategyKind>,
    computer_first: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(strategy) = strategy {
        config = config.with_strategy(strategy);
    }
    if computer_first {
        config = config.with_computer_first(true);
    }
    info!(?config, "Starting game");

    let human = HumanPlayer::new(config.human_name().clone(), io::stdin().lock(), io::stdout());
    let computer = ComputerPlayer::new(config.computer_name().clone(), config.build_strategy());
    let first = if *config.computer_first() { Side::O } else { Side::X };

    let mut game = Orchestrator::new(Box::new(human), Box::new(computer), io::stdout())
        .with_first(first);
    let status = game.run()?;
    info!(%status, "Finished");

    Ok(())
}

/// Print the computer's move for a position
#[instrument]
fn run_best_move(board: &str, strategy: StrategyKind) -> Result<()> {
    let mut board = Board::from_str(board).context("Invalid board")?;
    let config = GameConfig::default().with_strategy(strategy);

    match config.build_strategy().best_move(&mut board) {
        Some(index) => println!("{index}"),
        None => println!("none"),
    }

    Ok(())
}
