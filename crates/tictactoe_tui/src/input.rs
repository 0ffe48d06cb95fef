//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_core::DIM;

/// Moves the `(row, col)` cursor based on arrow or vi-style keys, clamping at
/// the board edges.
pub fn move_cursor(cursor: (usize, usize), key: KeyCode) -> (usize, usize) {
    let (row, col) = cursor;
    match key {
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(DIM - 1), col),
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(DIM - 1)),
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_board() {
        assert_eq!(move_cursor((1, 1), KeyCode::Up), (0, 1));
        assert_eq!(move_cursor((1, 1), KeyCode::Down), (2, 1));
        assert_eq!(move_cursor((1, 1), KeyCode::Left), (1, 0));
        assert_eq!(move_cursor((1, 1), KeyCode::Right), (1, 2));
    }

    #[test]
    fn test_clamps_at_edges() {
        assert_eq!(move_cursor((0, 0), KeyCode::Up), (0, 0));
        assert_eq!(move_cursor((0, 0), KeyCode::Left), (0, 0));
        assert_eq!(move_cursor((2, 2), KeyCode::Down), (2, 2));
        assert_eq!(move_cursor((2, 2), KeyCode::Right), (2, 2));
    }

    #[test]
    fn test_vi_keys() {
        assert_eq!(move_cursor((1, 1), KeyCode::Char('k')), (0, 1));
        assert_eq!(move_cursor((1, 1), KeyCode::Char('l')), (1, 2));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor((1, 2), KeyCode::Char('x')), (1, 2));
    }
}
