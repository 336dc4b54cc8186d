//! Command-line interface for strictly_minimax.

use strictly_minimax::StrategyKind;
use clap::{Parser, Subcommand};

/// Strictly Minimax - tic-tac-toe against a game-tree search
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Play tic-tac-toe against minimax / alpha-beta search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal
    Play {
        /// Search used by the computer (overrides the config file)
        #[arg(long, value_enum)]
        strategy: Option<StrategyKind>,

        /// Let the computer (O) move first
        #[arg(long)]
        computer_first: bool,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Print the computer's move for a position
    BestMove {
        /// Nine squares, row-major: X, O, and `.` for empty (e.g. "OO.XX....")
        #[arg(long)]
        board: String,

        /// Search to use
        #[arg(long, value_enum, default_value_t = StrategyKind::AlphaBeta)]
        strategy: StrategyKind,
    },
}
