//! Tests for board state and terminal detection.

use std::str::FromStr;
use strictly_minimax::{Board, Cell, GameStatus, Position, Side, rules};

fn line_board(line: [usize; 3], side: Side) -> Board {
    let mut board = Board::new();
    for index in line {
        board.make_move(index, side);
    }
    board
}

#[test]
fn test_available_moves_are_empty_squares_ascending() {
    for text in [".........", "X........", "X...O...X", "XOXOXXOX.", "XOXOXXOXO"] {
        let board = Board::from_str(text).unwrap();
        let moves = board.available_moves();

        let expected: Vec<usize> = (0..9).filter(|&i| board.get(i) == Some(Cell::Empty)).collect();
        assert_eq!(moves, expected, "board {text}");
        assert_eq!(moves.len(), 9 - board.moves_made(), "board {text}");
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_every_line_wins_for_both_sides() {
    for line in rules::LINES {
        for side in [Side::X, Side::O] {
            let board = line_board(line, side);
            assert!(board.check_winner(side), "{side} on {line:?}");
            assert_eq!(board.status(), GameStatus::Won(side));
            assert!(!board.check_winner(side.opponent()), "{side} on {line:?}");
        }
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = Board::from_str("XOXOXXOXO").unwrap();
    assert!(board.check_winner(Side::X));
    assert!(board.check_winner(Side::O));
    assert_eq!(board.status(), GameStatus::Draw);
}

#[test]
fn test_open_board_without_line_is_not_terminal() {
    let board = Board::from_str("XOXOXXOX.").unwrap();
    assert!(!board.check_winner(Side::X));
    assert!(!board.check_winner(Side::O));
    assert_eq!(board.status(), GameStatus::InProgress);
}

#[test]
fn test_check_winner_is_side_specific() {
    // O owns the top row; X has no line but the board is full.
    let board = Board::from_str("OOOXXOXXO").unwrap();
    assert!(board.check_winner(Side::X));
    assert_eq!(board.status(), GameStatus::Won(Side::O));
}

#[test]
fn test_check_winner_is_idempotent() {
    let board = Board::from_str("XXXOO....").unwrap();
    let before = board.clone();
    assert_eq!(board.check_winner(Side::X), board.check_winner(Side::X));
    assert_eq!(board.status(), board.status());
    assert_eq!(board, before);
}

#[test]
fn test_valid_positions_follow_board() {
    let board = Board::from_str("X...O....").unwrap();
    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
