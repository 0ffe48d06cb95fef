//! Welcome screen shown at application startup.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
};
use tracing::instrument;

use crate::screen::{Screen, ScreenTransition};
use crate::ui::center_rect;

/// Welcome screen offering to start a new game or quit.
#[derive(Debug)]
pub struct StartScreen;

impl StartScreen {
    /// Creates the welcome screen.
    pub fn new() -> Self {
        Self
    }
}

impl Screen for StartScreen {
    fn render(&self, frame: &mut Frame) {
        let area = center_rect(frame.area(), 50, 9);

        let text = Text::from(vec![
            Line::styled(
                "Welcome to the Tic-Tac-Toe Game!",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::raw("Press Enter to start"),
            Line::raw("Press 'q' to quit"),
        ]);

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Tic-Tac-Toe"));
        frame.render_widget(paragraph, area);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Enter | KeyCode::Char('s') => ScreenTransition::NewGame,
            KeyCode::Char('q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

impl Default for StartScreen {
    fn default() -> Self {
        Self::new()
    }
}
