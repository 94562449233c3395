//! Terminal UI for playing against the computer.

mod app;
mod input;
mod ui;

pub use app::App;

use crate::audio::TerminalBell;
use crate::config::GameConfig;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Write};
use tokio::time::{Duration, Instant, sleep};
use tracing::{error, info, instrument, warn};

/// Runs the terminal UI until the user quits.
pub async fn run_tui(config: GameConfig) -> Result<()> {
    // Log to a file so output does not tear the alternate screen
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(
        delay_ms = config.thinking_delay_ms(),
        muted = config.muted(),
        "Starting tic-tac-toe TUI"
    );

    enable_raw_mode()?;
    let guard = TerminalGuard::new(io::stdout());
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, Box::new(TerminalBell));
    let res = run_app(&mut terminal, &mut app).await;

    drop(guard);
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        x_wins = app.scoreboard().x_wins(),
        o_wins = app.scoreboard().o_wins(),
        draws = app.scoreboard().draws(),
        "Session finished"
    );
    res
}

/// Leaves raw mode and the alternate screen when dropped, including on early returns.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to leave raw mode");
        }
        if let Err(e) = execute!(self.out, LeaveAlternateScreen) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Draws, fires the computer move when due, and dispatches key presses.
#[instrument(skip_all)]
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind != KeyEventKind::Release {
                app.handle_key(key.code);
            }
        }

        sleep(Duration::from_millis(10)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_leaves_alternate_screen_on_drop() {
        let mut out = Vec::new();
        {
            let _guard = TerminalGuard::new(&mut out);
        }
        assert!(String::from_utf8_lossy(&out).contains("\x1b[?1049l"));
    }
}
