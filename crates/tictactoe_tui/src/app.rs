//! Application controller — the state machine driving the screens.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tracing::{debug, info, instrument};

use crate::screen::{Screen, ScreenTransition};
use crate::screens::{GameOverScreen, GameScreen, StartScreen};

/// Active screen in the application state machine.
#[derive(Debug)]
enum ActiveScreen {
    Start(StartScreen),
    Game(GameScreen),
    GameOver(GameOverScreen),
}

/// Controller that drives the screen state machine.
///
/// Call [`App::run`] to start the event loop.
#[derive(Debug)]
pub struct App {
    screen: ActiveScreen,
}

impl App {
    /// Creates the application, starting on the welcome screen.
    pub fn new() -> Self {
        Self {
            screen: ActiveScreen::Start(StartScreen::new()),
        }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        loop {
            terminal.draw(|frame| match &self.screen {
                ActiveScreen::Start(s) => s.render(frame),
                ActiveScreen::Game(s) => s.render(frame),
                ActiveScreen::GameOver(s) => s.render(frame),
            })?;

            // Poll with a short timeout to keep the loop responsive.
            if !event::poll(Duration::from_millis(100))? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            let transition = match &mut self.screen {
                ActiveScreen::Start(s) => s.handle_key(key),
                ActiveScreen::Game(s) => s.handle_key(key),
                ActiveScreen::GameOver(s) => s.handle_key(key),
            };

            match transition {
                ScreenTransition::Stay => {}
                ScreenTransition::NewGame => {
                    debug!("Starting new game");
                    self.screen = ActiveScreen::Game(GameScreen::new());
                }
                ScreenTransition::GameEnded { game } => {
                    info!(winner = ?game.winner(), "Game ended");
                    self.screen = ActiveScreen::GameOver(GameOverScreen::new(game));
                }
                ScreenTransition::Quit => {
                    info!("User quit");
                    return Ok(());
                }
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
