//! Terminal UI for two-player tic-tac-toe.
//!
//! Thin presentation layer over [`tictactoe_core`]: maps key presses to board
//! cells, renders marks, and shows the game-over dialog with restart/quit.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod input;
mod screen;
mod screens;
mod ui;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "tictactoe", about = "Two-player tic-tac-toe in the terminal")]
struct Cli {
    /// Write tracing output to this file (stderr would corrupt the TUI).
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log {
        let log_file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(Arc::new(log_file))
            .with_ansi(false)
            .init();
    }

    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let res = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        eprintln!("Error: {err:?}");
    }

    res
}
