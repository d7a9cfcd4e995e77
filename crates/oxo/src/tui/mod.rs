//! Terminal UI for oxo.

pub mod app;
pub mod input;
pub mod ui;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

use crate::logging;
use crate::scheduler::{AppEvent, ComputerScheduler};
use crate::settings::Settings;
use app::App;
use oxo_core::GameController;

/// Runs the terminal UI until the user quits.
pub async fn run_tui(settings: Settings) -> Result<()> {
    logging::init_file(settings.log_file(), settings.log_filter())?;
    info!(?settings, "Starting oxo TUI");

    install_panic_hook();
    let guard = TerminalGuard::enter(io::stdout())?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let game = match settings.seed() {
        Some(seed) => GameController::seeded(*seed),
        None => GameController::with_random(),
    };
    let scheduler = ComputerScheduler::new(settings.delay(), event_tx);
    let mut app = App::new(game, scheduler);

    let res = run_loop(&mut terminal, &mut app, &mut event_rx).await;
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(tally = %app.game().tally(), "Session over");
    res
}

#[instrument(skip_all)]
async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    event_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        // Blocking poll; short enough for due computer moves to show promptly.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            return Ok(());
        }

        tokio::task::yield_now().await;
    }
}

/// Holds raw mode and the alternate screen; leaves both when dropped.
///
/// Dropping covers early `?` returns during setup as well as normal exit.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal(&mut self.out) {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}

fn restore_terminal(out: &mut impl Write) -> io::Result<()> {
    // Raw mode may already be off, or there may be no tty at all.
    let _ = disable_raw_mode();
    execute!(out, LeaveAlternateScreen, Show)
}

/// Restores the terminal before the default hook prints a panic message.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal(&mut io::stdout());
        default_hook(info);
    }));
}
