//! Screen trait and transition type for the application state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use tictactoe_core::GameState;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`App`](crate::app::App) state machine.
#[derive(Debug)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Start a fresh game with a brand-new game state.
    NewGame,
    /// The game reached a terminal state; show the game-over dialog.
    GameEnded {
        /// Final state of the finished game, used to render the board and
        /// pick the dialog message.
        game: GameState,
    },
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the application.
///
/// Each screen owns its own state, renders its UI, and handles key events.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;
}
