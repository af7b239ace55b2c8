//! Contacts CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`contacts_engine`] (application state) and [`contacts_tui`]
//! (rendering), providing RAII-based terminal management with guaranteed cleanup.
//!
//! ```text
//! main() -> TerminalSession::new() -> run_app() -> App + TUI
//! ```
//!
//! # Event Loop
//!
//! The loop only draws when the app reports a state change:
//!
//! 1. If the app is dirty, build the screen model for the current route and draw it
//! 2. Stop if a quit was requested
//! 3. Block on the next terminal event and dispatch it

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{
    fs::{self, File, OpenOptions},
    io::{self, Stdout, stdout},
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use contacts_config::ContactsConfig;
use contacts_engine::{App, Directory};
use contacts_tui::{Screen, draw, handle_event};

/// A log file that opened, plus why any earlier candidates were passed over.
struct LogFile {
    path: PathBuf,
    file: File,
    skipped: Vec<String>,
}

/// Logs go to a file or nowhere: the terminal belongs to the UI.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(log) = open_log_file(&log_file_candidates(ContactsConfig::path().as_deref())) else {
        tracing_subscriber::registry().with(filter).init();
        return;
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(log.file)),
        )
        .with(filter)
        .init();

    tracing::info!(path = %log.path.display(), "Logging to file");
    for reason in &log.skipped {
        tracing::warn!("Skipped log file {reason}");
    }
}

fn open_log_file(candidates: &[PathBuf]) -> Option<LogFile> {
    let mut skipped = Vec::new();
    for path in candidates {
        match append_to(path) {
            Ok(file) => {
                return Some(LogFile {
                    path: path.clone(),
                    file,
                    skipped,
                });
            }
            Err(err) => skipped.push(format!("{}: {err}", path.display())),
        }
    }
    None
}

fn append_to(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// `logs/contacts.log` beside the config file, then under `./.contacts`.
fn log_file_candidates(config_path: Option<&Path>) -> Vec<PathBuf> {
    let log_name = Path::new("logs").join("contacts.log");
    let beside_config = config_path
        .and_then(Path::parent)
        .map(|dir| dir.join(&log_name));
    let local = Path::new(".contacts").join(&log_name);

    beside_config.into_iter().chain([local]).collect()
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Enables raw mode, the alternate screen and mouse capture (card clicks and
/// the title-bar back arrow). On drop all of it is restored, so the terminal
/// stays usable after errors and early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            let _ = execute!(out, DisableMouseCapture, LeaveAlternateScreen);
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = match ContactsConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Using default config: {err}");
            None
        }
    };
    let ui_options = ContactsConfig::ui_options(config.as_ref());
    let directory = Directory::builtin().context("invalid built-in contact dataset")?;
    let mut app = App::new(directory, ui_options);

    let result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut app)
    };

    if let Err(err) = &result {
        tracing::error!("Exiting on error: {err:#}");
    }
    result
}

fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    loop {
        if app.take_redraw() {
            let screen = Screen::build(app)
                .with_context(|| format!("cannot render route {}", app.route()))?;
            terminal.draw(|frame| draw(frame, app, &screen))?;
        }

        if app.should_quit() {
            tracing::info!("Quit requested");
            return Ok(());
        }

        let event = event::read()?;
        handle_event(app, &event);
    }
}
