//! Game-tree search for the computer side.
//!
//! O always maximizes and X always minimizes. Every function here mutates
//! the board speculatively and restores it before returning, so callers
//! see the board exactly as they passed it in.
//!
//! Two strategies share the same board walk:
//!
//! - [`Minimax`]: full minimax to a fixed depth of 6 plies.
//! - [`AlphaBeta`]: immediate win / immediate block checks, then alpha-beta
//!   to a fixed depth of 4 plies.

mod alpha_beta;
mod minimax;

pub use alpha_beta::{ALPHA_BETA_DEPTH, AlphaBeta, evaluate_ab, find_best_move_ab};
pub use minimax::{MINIMAX_DEPTH, Minimax, evaluate, find_best_move};

use crate::games::tictactoe::{Board, GameStatus, Side, rules};
use std::ops::ControlFlow;

/// Value of a position from O's point of view.
pub type Score = i32;

/// O has completed a line.
pub const O_WINS: Score = 1;
/// X has completed a line.
pub const X_WINS: Score = -1;
/// Draw, or a position cut off at the depth horizon.
pub const DRAW: Score = 0;

/// A move-selection strategy for O.
pub trait Strategy {
    /// Short name for logs and messages.
    fn name(&self) -> &'static str;

    /// Picks O's move, or `None` when the board has no empty square.
    ///
    /// The board is used as scratch space and restored before returning.
    fn best_move(&self, board: &mut Board) -> Option<usize>;
}

/// Side to move at a node.
fn mover(maximizing: bool) -> Side {
    if maximizing { Side::O } else { Side::X }
}

fn win_score(side: Side) -> Score {
    match side {
        Side::O => O_WINS,
        Side::X => X_WINS,
    }
}

/// Score of a node that is not expanded: a finished game, or any position
/// once the depth budget is spent.
fn leaf_score(board: &Board, depth: u32) -> Option<Score> {
    match board.status() {
        GameStatus::Won(side) => Some(win_score(side)),
        GameStatus::Draw => Some(DRAW),
        GameStatus::InProgress if depth == 0 => Some(DRAW),
        GameStatus::InProgress => None,
    }
}

/// Places `side` at `index`, runs `f` on the board, then clears the square.
fn speculate<T>(board: &mut Board, index: usize, side: Side, f: impl FnOnce(&mut Board) -> T) -> T {
    board.make_move(index, side);
    let result = f(board);
    board.undo_move(index);
    result
}

/// Expands an interior node.
///
/// Each reply of the side to move is placed in turn. A reply that completes
/// a line for the mover settles the node at that side's winning score and
/// stops the walk. Otherwise `child` scores the position after the reply;
/// returning `Break` stops the walk after folding that score in.
fn expand_node(
    board: &mut Board,
    maximizing: bool,
    mut child: impl FnMut(&mut Board) -> ControlFlow<Score, Score>,
) -> Score {
    let side = mover(maximizing);
    let mut best = if maximizing { Score::MIN } else { Score::MAX };

    for index in board.available_moves() {
        let step = speculate(board, index, side, |board| {
            if rules::has_line(board, side) {
                ControlFlow::Break(win_score(side))
            } else {
                child(board)
            }
        });

        let (score, stop) = match step {
            ControlFlow::Continue(score) => (score, false),
            ControlFlow::Break(score) => (score, true),
        };
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
        if stop {
            break;
        }
    }

    best
}

/// Root selection: tries every O move, keeps the strictly best score.
///
/// Ties go to the lowest index. Returns the move and its score.
fn select_move(
    board: &mut Board,
    mut score: impl FnMut(&mut Board) -> Score,
) -> Option<(usize, Score)> {
    let mut best: Option<(usize, Score)> = None;
    for index in board.available_moves() {
        let eval = speculate(board, index, Side::O, &mut score);
        if best.is_none_or(|(_, best_eval)| eval > best_eval) {
            best = Some((index, eval));
        }
    }
    best
}

/// First empty square where `side` would complete a line.
fn immediate_win(board: &mut Board, side: Side) -> Option<usize> {
    board
        .available_moves()
        .into_iter()
        .find(|&index| speculate(board, index, side, |board| rules::has_line(board, side)))
}
