//! Pure game-state engine for two-player tic-tac-toe.
//!
//! The engine is the authoritative model of the 3×3 board, turn order, move
//! legality, and terminal-condition detection. It has no UI dependencies;
//! presentation layers drive it through [`GameState::apply_move`] and
//! [`GameState::switch_player`] and read results back through the query
//! methods.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, Mark};
//!
//! let mut game = GameState::new();
//! game.apply_move(0, 0)?; // X plays the top-left cell
//! assert!(!game.game_over());
//! game.switch_player();
//! assert_eq!(game.current_player(), Mark::O);
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
pub mod rules;
mod types;

pub use error::MoveError;
pub use game::GameState;
pub use types::{Board, CELLS, DIM, Mark, Square};
