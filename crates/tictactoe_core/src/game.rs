//! The game-state engine: move application, turn rotation, and queries.

use crate::error::MoveError;
use crate::rules;
use crate::types::{Board, CELLS, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Authoritative state of one tic-tac-toe game.
///
/// A `GameState` is created fresh for each game (and each restart), mutated in
/// place by successive calls to [`apply_move`](GameState::apply_move), and
/// discarded when the user restarts. Move application and turn rotation are
/// deliberately separate operations: the caller decides when the turn rotates,
/// and typically skips rotation after a game-ending move so the queries still
/// identify the player who just won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Mark,
    move_count: usize,
    game_over: bool,
    winner: Option<Mark>,
}

impl GameState {
    /// Creates a fresh game: empty board, `X` to move, no moves played.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            move_count: 0,
            game_over: false,
            winner: None,
        }
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// On success the move count is incremented and terminal status is
    /// re-evaluated: the game ends when the mover completes a line or the
    /// board fills up. The turn does **not** rotate; call
    /// [`switch_player`](GameState::switch_player) for that.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already ended.
    /// - [`MoveError::OutOfRange`] if either coordinate exceeds 2.
    /// - [`MoveError::SquareOccupied`] if the cell already holds a mark.
    ///
    /// A failed call leaves the state completely unchanged.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }

        match self.board.get(row, col) {
            None => return Err(MoveError::OutOfRange(row, col)),
            Some(Square::Occupied(_)) => return Err(MoveError::SquareOccupied(row, col)),
            Some(Square::Empty) => {}
        }

        let mover = self.current_player;
        self.board.set(row, col, Square::Occupied(mover))?;
        self.move_count += 1;

        if rules::has_line(&self.board, mover) {
            self.winner = Some(mover);
            self.game_over = true;
        } else if self.move_count == CELLS {
            self.game_over = true;
        }

        Ok(())
    }

    /// Toggles whose turn it is.
    ///
    /// A pure toggle with no legality or game-over guard; callers invoke it
    /// after a successful non-terminal move.
    #[instrument(skip(self))]
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Returns the mark whose turn it is.
    ///
    /// After a winning move and before any [`switch_player`] call this is
    /// still the mover, so it identifies the winner.
    ///
    /// [`switch_player`]: GameState::switch_player
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns whether the game has reached a terminal state.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Returns whether some player has completed a line.
    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns the winning mark, or `None` while the game is running or after
    /// a draw.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Number of marks placed so far (0 to 9).
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_defaults() {
        let game = GameState::new();
        assert_eq!(game.current_player(), Mark::X);
        assert_eq!(game.move_count(), 0);
        assert!(!game.game_over());
        assert!(!game.has_winner());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_switch_player_toggles() {
        let mut game = GameState::new();
        game.switch_player();
        assert_eq!(game.current_player(), Mark::O);
        game.switch_player();
        assert_eq!(game.current_player(), Mark::X);
    }

    #[test]
    fn test_apply_move_does_not_rotate_turn() {
        let mut game = GameState::new();
        game.apply_move(1, 1).unwrap();
        assert_eq!(game.current_player(), Mark::X);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = GameState::new();
        game.apply_move(0, 0).unwrap();
        game.switch_player();
        assert_eq!(game.apply_move(0, 0), Err(MoveError::SquareOccupied(0, 0)));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut game = GameState::new();
        assert_eq!(game.apply_move(3, 0), Err(MoveError::OutOfRange(3, 0)));
        assert_eq!(game.apply_move(0, 9), Err(MoveError::OutOfRange(0, 9)));
        assert_eq!(game.move_count(), 0);
    }
}
