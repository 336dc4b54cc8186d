//! Strictly Minimax library - tic-tac-toe with a game-tree search opponent
//!
//! # Architecture
//!
//! - **Board**: 9-cell grid, move application, terminal detection
//! - **Search**: full minimax and alpha-beta move selection for O
//! - **Players**: human (line input) and computer (search strategy)
//! - **Orchestrator**: the turn loop
//!
//! # Example
//!
//! ```
//! use std::str::FromStr;
//! use strictly_minimax::{Board, find_best_move_ab};
//!
//! let mut board = Board::from_str("OO.XX....").unwrap();
//! assert_eq!(find_best_move_ab(&mut board), Some(2));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod orchestrator;
mod players;
mod search;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, StrategyKind};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{Board, CELLS, Cell, GameStatus, ParseBoardError, Position, Side, rules};

// Crate-level exports - Search
pub use search::{
    ALPHA_BETA_DEPTH, AlphaBeta, DRAW, MINIMAX_DEPTH, Minimax, O_WINS, Score, Strategy, X_WINS,
    evaluate, evaluate_ab, find_best_move, find_best_move_ab,
};

// Crate-level exports - Players and turn loop
pub use orchestrator::Orchestrator;
pub use players::{ComputerPlayer, HumanPlayer, Player};
