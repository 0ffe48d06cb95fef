//! In-game screen — the playable 3×3 grid.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{GameState, MoveError};
use tracing::{debug, instrument};

use crate::input;
use crate::screen::{Screen, ScreenTransition};
use crate::ui;

/// Screen showing the board with a movable cursor.
///
/// Owns the [`GameState`] for the duration of one game. Arrow keys (or hjkl)
/// move the cursor; Enter or Space places the current player's mark.
#[derive(Debug)]
pub struct GameScreen {
    game: GameState,
    cursor: (usize, usize),
}

impl GameScreen {
    /// Creates the screen with a fresh game and the cursor on the center cell.
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            cursor: (1, 1),
        }
    }

    /// Applies a move at the cursor and decides where to go next.
    ///
    /// On a terminal move the turn is deliberately not rotated, so the final
    /// state still identifies the player who just won. Illegal moves have no
    /// visible effect.
    fn activate_cell(&mut self) -> ScreenTransition {
        let (row, col) = self.cursor;
        match self.game.apply_move(row, col) {
            Ok(()) => {
                if self.game.game_over() {
                    return ScreenTransition::GameEnded {
                        game: self.game.clone(),
                    };
                }
                self.game.switch_player();
                ScreenTransition::Stay
            }
            Err(e @ (MoveError::SquareOccupied(..) | MoveError::GameOver)) => {
                debug!(row, col, error = %e, "Ignoring illegal move");
                ScreenTransition::Stay
            }
            Err(e @ MoveError::OutOfRange(..)) => {
                // The cursor is clamped to the board, so this is unreachable
                // unless the input layer regresses.
                debug!(row, col, error = %e, "Cursor produced out-of-range cell");
                ScreenTransition::Stay
            }
        }
    }
}

impl Screen for GameScreen {
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(11),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new("Tic-Tac-Toe")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        ui::draw_board(frame, chunks[1], self.game.board(), Some(self.cursor));

        let status = format!(
            "{} to move — arrows to select, Enter to place, 'q' to quit",
            self.game.current_player()
        );
        let status = Paragraph::new(status)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[2]);
    }

    #[instrument(skip(self, key), fields(cursor = ?self.cursor))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => ScreenTransition::Quit,
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_cell(),
            code => {
                self.cursor = input::move_cursor(self.cursor, code);
                ScreenTransition::Stay
            }
        }
    }
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_placing_a_mark_rotates_the_turn() {
        let mut screen = GameScreen::new();
        let transition = screen.handle_key(press(KeyCode::Enter));
        assert!(matches!(transition, ScreenTransition::Stay));
        assert_eq!(screen.game.move_count(), 1);
        assert_eq!(screen.game.current_player(), tictactoe_core::Mark::O);
    }

    #[test]
    fn test_occupied_cell_has_no_effect() {
        let mut screen = GameScreen::new();
        screen.handle_key(press(KeyCode::Enter));
        let transition = screen.handle_key(press(KeyCode::Enter));
        assert!(matches!(transition, ScreenTransition::Stay));
        assert_eq!(screen.game.move_count(), 1);
        assert_eq!(screen.game.current_player(), tictactoe_core::Mark::O);
    }

    #[test]
    fn test_winning_move_transitions_to_game_over() {
        let mut screen = GameScreen::new();
        // X (0,0) O (1,0) X (0,1) O (1,1) X (0,2): X wins the top row.
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            screen.cursor = (row, col);
            let transition = screen.handle_key(press(KeyCode::Enter));
            if screen.game.game_over() {
                match transition {
                    ScreenTransition::GameEnded { game } => {
                        assert_eq!(game.winner(), Some(tictactoe_core::Mark::X));
                        return;
                    }
                    other => panic!("expected GameEnded, got {other:?}"),
                }
            }
        }
        panic!("game never ended");
    }
}
