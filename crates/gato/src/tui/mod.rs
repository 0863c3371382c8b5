//! Terminal UI: renders the board and feeds mouse and keyboard input to the
//! controller.

mod app;
mod input;
mod layout;
mod ui;

pub use app::App;
pub use layout::{MenuItem, ScreenLayout};

use crate::settings::Settings;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tracing::{error, info, instrument, warn};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode, alternate screen and mouse capture. Restored on drop.
struct TerminalGuard<W: Write> {
    out: W,
    active: bool,
}

impl TerminalGuard<Stdout> {
    /// Switches the terminal over to the game.
    ///
    /// If a step fails, the steps already taken are undone before the error
    /// is returned.
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self::new(io::stdout());
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl<W: Write> TerminalGuard<W> {
    fn new(out: W) -> Self {
        Self { out, active: true }
    }

    /// Gives the terminal back to the shell, reporting failures.
    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(self.out, LeaveAlternateScreen, DisableMouseCapture)?;
        Ok(())
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Runs the game until the user quits.
///
/// The terminal is restored before any error is returned.
#[instrument(skip_all, fields(mode = %settings.mode()))]
pub fn run(settings: &Settings) -> Result<()> {
    info!("Starting Gato TUI");

    let mut guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*settings.mode());
    let res = run_app(&mut terminal, &mut app);

    guard.restore()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Gato TUI exited");
    res
}

fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut layout = ScreenLayout::new(Rect::default());

    while !app.should_quit() {
        terminal.draw(|frame| {
            layout = ScreenLayout::new(frame.area());
            ui::draw(frame, app, &layout);
        })?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
                Event::Mouse(mouse) => app.handle_mouse(mouse, &layout),
                _ => {}
            }
        }
    }

    Ok(())
}
