//! Core domain types: marks, squares, and the board.

use serde::{Deserialize, Serialize};

/// Board dimension. Fixed at 3; not configurable.
pub const DIM: usize = 3;

/// Total number of cells on the board.
pub const CELLS: usize = DIM * DIM;

/// A player's mark. Each mark identifies one of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The mark for player X (moves first).
    X,
    /// The mark for player O.
    O,
}

impl Mark {
    /// Returns the other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// No mark has been placed here.
    Empty,
    /// A player's mark occupies this cell.
    Occupied(Mark),
}

/// The 3×3 board, stored row-major.
///
/// Cells are read by `(row, col)` with both coordinates in `0..DIM`. Mutation
/// is crate-private: once placed through [`crate::GameState::apply_move`], a
/// mark is never cleared or overwritten for the lifetime of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; CELLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Returns the square at `(row, col)`, or `None` if either coordinate is
    /// out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        Self::index(row, col).map(|i| self.squares[i])
    }

    /// Checks whether the cell at `(row, col)` is empty.
    ///
    /// Out-of-range coordinates are reported as not empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Writes a square at `(row, col)`.
    pub(crate) fn set(
        &mut self,
        row: usize,
        col: usize,
        square: Square,
    ) -> Result<(), crate::MoveError> {
        let i = Self::index(row, col).ok_or(crate::MoveError::OutOfRange(row, col))?;
        self.squares[i] = square;
        Ok(())
    }

    fn index(row: usize, col: usize) -> Option<usize> {
        (row < DIM && col < DIM).then_some(row * DIM + col)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..DIM {
            for col in 0..DIM {
                assert!(board.is_empty(row, col));
            }
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(0, 3), None);
        assert!(!board.is_empty(3, 3));
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        board.set(1, 2, Square::Occupied(Mark::O)).unwrap();
        assert_eq!(board.get(1, 2), Some(Square::Occupied(Mark::O)));
        assert!(!board.is_empty(1, 2));
    }

    #[test]
    fn test_opponent_is_involutive() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent().opponent(), Mark::O);
    }
}
