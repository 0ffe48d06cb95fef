//! Win detection logic.

use crate::types::{Board, DIM, Mark, Square};
use tracing::instrument;

/// Checks whether `mark` has three in a line anywhere on the board.
///
/// Evaluates diagonals, rows, and columns for the given mark only. Empty
/// squares never match a mark, so partially filled lines never count.
#[instrument]
pub fn has_line(board: &Board, mark: Mark) -> bool {
    has_diagonal(board, mark) || has_row(board, mark) || has_col(board, mark)
}

fn owns(board: &Board, row: usize, col: usize, mark: Mark) -> bool {
    board.get(row, col) == Some(Square::Occupied(mark))
}

fn has_row(board: &Board, mark: Mark) -> bool {
    (0..DIM).any(|row| (0..DIM).all(|col| owns(board, row, col, mark)))
}

fn has_col(board: &Board, mark: Mark) -> bool {
    (0..DIM).any(|col| (0..DIM).all(|row| owns(board, row, col, mark)))
}

fn has_diagonal(board: &Board, mark: Mark) -> bool {
    let main = (0..DIM).all(|i| owns(board, i, i, mark));
    let anti = (0..DIM).all(|i| owns(board, i, DIM - 1 - i, mark));
    main || anti
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(row, col, mark) in marks {
            board.set(row, col, Square::Occupied(mark)).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_line() {
        let board = Board::new();
        assert!(!has_line(&board, Mark::X));
        assert!(!has_line(&board, Mark::O));
    }

    #[test]
    fn test_row_win() {
        let board = board_with(&[(0, 0, Mark::X), (0, 1, Mark::X), (0, 2, Mark::X)]);
        assert!(has_line(&board, Mark::X));
        assert!(!has_line(&board, Mark::O));
    }

    #[test]
    fn test_column_win() {
        let board = board_with(&[(0, 1, Mark::O), (1, 1, Mark::O), (2, 1, Mark::O)]);
        assert!(has_line(&board, Mark::O));
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = board_with(&[(0, 0, Mark::X), (1, 1, Mark::X), (2, 2, Mark::X)]);
        assert!(has_line(&board, Mark::X));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_with(&[(0, 2, Mark::O), (1, 1, Mark::O), (2, 0, Mark::O)]);
        assert!(has_line(&board, Mark::O));
    }

    #[test]
    fn test_partial_line_is_not_a_win() {
        let board = board_with(&[(0, 0, Mark::X), (0, 1, Mark::X)]);
        assert!(!has_line(&board, Mark::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, 0, Mark::X), (0, 1, Mark::O), (0, 2, Mark::X)]);
        assert!(!has_line(&board, Mark::X));
        assert!(!has_line(&board, Mark::O));
    }
}
