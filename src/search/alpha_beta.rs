//! Alpha-beta search with immediate win / block shortcuts.

use super::{Score, Strategy, expand_node, immediate_win, leaf_score, select_move};
use crate::games::tictactoe::{Board, Side};
use std::ops::ControlFlow;
use tracing::{debug, instrument};

/// Plies searched below O's candidate move by [`find_best_move_ab`].
///
/// Shallower than [`super::MINIMAX_DEPTH`]; the win and block checks run
/// before the search.
pub const ALPHA_BETA_DEPTH: u32 = 4;

/// Minimax value of `board` with alpha-beta cutoffs.
///
/// The window `[alpha, beta]` narrows as children are scored; once
/// `beta <= alpha` the remaining replies at this node are skipped. The
/// returned score is the best seen at the node, which may lie outside the
/// window.
pub fn evaluate_ab(
    board: &mut Board,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    depth: u32,
) -> Score {
    if let Some(score) = leaf_score(board, depth) {
        return score;
    }

    expand_node(board, maximizing, |board| {
        let eval = evaluate_ab(board, alpha, beta, !maximizing, depth - 1);
        if maximizing {
            alpha = alpha.max(eval);
        } else {
            beta = beta.min(eval);
        }
        if beta <= alpha {
            ControlFlow::Break(eval)
        } else {
            ControlFlow::Continue(eval)
        }
    })
}

/// O's move: win now, else block X, else alpha-beta at [`ALPHA_BETA_DEPTH`].
///
/// Returns `None` on a full board.
pub fn find_best_move_ab(board: &mut Board) -> Option<usize> {
    AlphaBeta.best_move(board)
}

/// Alpha-beta strategy; the fallback search runs [`ALPHA_BETA_DEPTH`] plies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlphaBeta;

impl Strategy for AlphaBeta {
    fn name(&self) -> &'static str {
        "alpha-beta"
    }

    #[instrument(skip(self, board), fields(depth = ALPHA_BETA_DEPTH, moves_made = board.moves_made()))]
    fn best_move(&self, board: &mut Board) -> Option<usize> {
        if let Some(index) = immediate_win(board, Side::O) {
            debug!(index, "Taking immediate win");
            return Some(index);
        }

        if let Some(index) = immediate_win(board, Side::X) {
            debug!(index, "Blocking opponent line");
            return Some(index);
        }

        // The root window is never narrowed; each candidate gets a full one.
        let choice = select_move(board, |board| {
            evaluate_ab(board, Score::MIN, Score::MAX, false, ALPHA_BETA_DEPTH)
        });
        debug!(?choice, "Alpha-beta decision");
        choice.map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{DRAW, O_WINS, X_WINS, evaluate};
    use std::str::FromStr;

    #[test]
    fn test_evaluate_ab_finished_game() {
        let mut board = Board::from_str("OOOXX.X..").unwrap();
        assert_eq!(evaluate_ab(&mut board, Score::MIN, Score::MAX, false, 4), O_WINS);
    }

    #[test]
    fn test_evaluate_ab_depth_zero_is_neutral() {
        let mut board = Board::from_str("XX.OO....").unwrap();
        assert_eq!(evaluate_ab(&mut board, Score::MIN, Score::MAX, false, 0), DRAW);
    }

    #[test]
    fn test_evaluate_ab_cutoff_skips_later_replies() {
        // X could win at 5, but its first reply (2) already scores 0. With
        // alpha at 0 that closes the window and the node stops there.
        let mut board = Board::from_str("OO.XX....").unwrap();
        assert_eq!(evaluate_ab(&mut board, 0, Score::MAX, false, 2), DRAW);
        assert_eq!(evaluate_ab(&mut board, Score::MIN, Score::MAX, false, 2), X_WINS);
    }

    #[test]
    fn test_matches_minimax_with_full_window() {
        for text in ["X........", "X...O....", "XX.O.....", "X.O.X....", "OX.XO...."] {
            for depth in 0..=5 {
                for maximizing in [true, false] {
                    let mut board = Board::from_str(text).unwrap();
                    assert_eq!(
                        evaluate_ab(&mut board, Score::MIN, Score::MAX, maximizing, depth),
                        evaluate(&mut board, maximizing, depth),
                        "board {text} depth {depth} maximizing {maximizing}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_evaluate_ab_last_square_draw_is_not_a_win() {
        let mut board = Board::from_str("XOXXOOOX.").unwrap();
        assert_eq!(evaluate_ab(&mut board, Score::MIN, Score::MAX, true, 1), DRAW);
        assert_eq!(find_best_move_ab(&mut board), Some(8));
    }
}
