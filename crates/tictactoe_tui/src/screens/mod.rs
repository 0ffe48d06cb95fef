//! The three screens of the application: welcome, game grid, and game-over.

mod game;
mod game_over;
mod start;

pub use game::GameScreen;
pub use game_over::GameOverScreen;
pub use start::StartScreen;
