//! Terminal front end for time-travel tic-tac-toe.
//!
//! The [`GameShell`] owns the game store, renders the board, status and
//! move list with `ratatui`, and turns key presses and mouse clicks into
//! reducer actions.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod shell;
pub mod ui;

pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, MAX_SIDE, MIN_SIDE, TuiConfig};
pub use input::{digit_cell, move_cursor};
pub use shell::{GameShell, ShellEvent, ShellTransition};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument, warn};

/// Installs a tracing subscriber writing to the configured log file.
///
/// The terminal belongs to the UI, so nothing is logged to it.
pub fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Runs the game in the current terminal until the user quits.
#[instrument(skip(config))]
pub async fn run_tui(config: TuiConfig) -> Result<()> {
    info!(?config, "Starting time-travel tic-tac-toe");

    let mut shell = GameShell::new(&config)?;

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        || {
            if let Err(err) = disable_raw_mode() {
                warn!(error = ?err, "Failed to disable raw mode");
            }
            if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
                warn!(error = ?err, "Failed to leave alternate screen");
            }
        },
    )?;

    let res = shell.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Runs `setup`, calling `restore` before handing back its error.
fn setup_or_restore<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|err| {
        error!(error = ?err, "Terminal setup failed, restoring");
        restore();
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let res: Result<()> = setup_or_restore(
            || Err(anyhow::anyhow!("no alternate screen")),
            || restored.set(true),
        );
        assert!(res.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_leaves_terminal_alone() {
        let restored = Cell::new(false);
        let res = setup_or_restore(|| Ok(7), || restored.set(true));
        assert_eq!(res.unwrap(), 7);
        assert!(!restored.get());
    }
}
