//! Unpruned minimax.

use super::{Score, Strategy, expand_node, leaf_score, select_move};
use crate::games::tictactoe::Board;
use std::ops::ControlFlow;
use tracing::{debug, instrument};

/// Plies searched below O's candidate move by [`find_best_move`].
///
/// A game from the empty board can need 9 plies, so early positions may
/// reach the horizon and score as a draw.
pub const MINIMAX_DEPTH: u32 = 6;

/// Minimax value of `board` with `depth` plies left.
///
/// `maximizing` means O is to move. A reply that completes a line for the
/// mover ends the node immediately at that side's winning score.
pub fn evaluate(board: &mut Board, maximizing: bool, depth: u32) -> Score {
    if let Some(score) = leaf_score(board, depth) {
        return score;
    }

    expand_node(board, maximizing, |board| {
        ControlFlow::Continue(evaluate(board, !maximizing, depth - 1))
    })
}

/// O's move by full minimax at [`MINIMAX_DEPTH`].
///
/// Returns `None` on a full board.
pub fn find_best_move(board: &mut Board) -> Option<usize> {
    Minimax.best_move(board)
}

/// Full minimax strategy, searching [`MINIMAX_DEPTH`] plies below each
/// candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minimax;

impl Strategy for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    #[instrument(skip(self, board), fields(depth = MINIMAX_DEPTH, moves_made = board.moves_made()))]
    fn best_move(&self, board: &mut Board) -> Option<usize> {
        // The candidate is already placed, so X is to move.
        let choice = select_move(board, |board| evaluate(board, false, MINIMAX_DEPTH));
        debug!(?choice, "Minimax decision");
        choice.map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{DRAW, O_WINS, X_WINS};
    use std::str::FromStr;

    #[test]
    fn test_evaluate_finished_game() {
        let mut board = Board::from_str("XXXOO....").unwrap();
        assert_eq!(evaluate(&mut board, true, 3), X_WINS);
    }

    #[test]
    fn test_evaluate_depth_zero_is_neutral() {
        let mut board = Board::from_str("OO.XX....").unwrap();
        assert_eq!(evaluate(&mut board, true, 0), DRAW);
    }

    #[test]
    fn test_evaluate_sees_immediate_win() {
        let mut board = Board::from_str("OO.XX....").unwrap();
        assert_eq!(evaluate(&mut board, true, 1), O_WINS);
        assert_eq!(evaluate(&mut board, false, 1), X_WINS);
    }

    #[test]
    fn test_evaluate_sees_unstoppable_fork() {
        // X to move at 4 forks 0-4-8 and 1-4-7; O cannot cover both.
        let mut board = Board::from_str("XXOO.....").unwrap();
        assert_eq!(evaluate(&mut board, false, 3), X_WINS);
    }

    #[test]
    fn test_evaluate_last_square_draw_is_not_a_win() {
        // O's only reply fills square 8 without completing a line.
        let mut board = Board::from_str("XOXXOOOX.").unwrap();
        assert_eq!(evaluate(&mut board, true, 1), DRAW);
        assert_eq!(evaluate(&mut board, true, MINIMAX_DEPTH), DRAW);
        assert_eq!(find_best_move(&mut board), Some(8));
    }

    #[test]
    fn test_horizon_hides_later_threats() {
        // After O takes 0, X completes the bottom row at 8 one ply later.
        let mut board = Board::from_str("OO..O.XX.").unwrap();
        assert_eq!(evaluate(&mut board, false, 0), DRAW);
        assert_eq!(evaluate(&mut board, false, 1), X_WINS);
    }
}
