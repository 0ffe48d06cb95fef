//! Game-over screen — the final board with a result dialog.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tictactoe_core::GameState;
use tracing::instrument;

use crate::screen::{Screen, ScreenTransition};
use crate::ui;

/// Modal screen shown once the game reaches a terminal state.
#[derive(Debug)]
pub struct GameOverScreen {
    game: GameState,
    message: String,
}

impl GameOverScreen {
    /// Creates the screen from the finished game.
    pub fn new(game: GameState) -> Self {
        let message = match game.winner() {
            Some(mark) => format!("Game is over! The winner is: {mark}"),
            None => "Game is over! It's a draw!".to_string(),
        };
        Self { game, message }
    }
}

impl Screen for GameOverScreen {
    fn render(&self, frame: &mut Frame) {
        // Final board stays visible behind the dialog.
        ui::draw_board(frame, frame.area(), self.game.board(), None);

        let dialog_area = ui::center_rect(frame.area(), 46, 7);
        frame.render_widget(Clear, dialog_area);

        let text = Text::from(vec![
            Line::styled(
                self.message.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::raw("Press 'r' to restart or 'q' to quit."),
        ]);

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Game Over"));
        frame.render_widget(paragraph, dialog_area);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Char('r') => ScreenTransition::NewGame,
            KeyCode::Char('q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
