//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board according to the rules, separated
//! from board storage and from the mutable engine in [`crate::GameState`].

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::has_line;
