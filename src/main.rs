//! tasklist - A small terminal task list.

use std::io::{self, Write};
use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use tasklist::cli::{run_command, Command};
use tasklist::core::{FileStore, KeyValueStore};
use tasklist::theme::Theme;
use tasklist::ui::{handle_input, render, App};

/// A small terminal task list.
#[derive(Parser, Debug)]
#[command(name = "tasklist", version, about)]
struct Cli {
    /// Path to the task store file (default: user config dir)
    #[arg(long, value_name = "PATH", global = true)]
    store: Option<PathBuf>,

    /// Path to the log file (default: user cache dir)
    #[arg(long, value_name = "PATH", global = true)]
    log_file: Option<PathBuf>,

    /// Color theme (default, gruvbox, nord)
    #[arg(short = 't', long = "theme", value_name = "THEME")]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

/// RAII guard for terminal state. Restores terminal on drop (including panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    // Disable mouse capture first (while still in raw mode)
    let _ = execute!(io::stdout(), DisableMouseCapture, DisableBracketedPaste);
    let _ = io::stdout().flush();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = disable_raw_mode();
    let _ = io::stdout().flush();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(tasklist::logging::default_log_path);
    if !tasklist::logging::init_global(&log_file) {
        eprintln!("Warning: logging disabled ({})", log_file.display());
    }
    tasklist::metrics::init();

    let store = match cli.store {
        Some(ref path) => FileStore::with_path(path.clone()),
        None => FileStore::open_default(),
    };
    tracing::info!(store = %store.path().display(), "tasklist starting");

    if let Some(command) = cli.command {
        return run_command(store, command);
    }

    if let Some(name) = cli.theme.as_deref() {
        if !Theme::exists(name) {
            eprintln!(
                "Unknown theme '{}' (available: {})",
                name,
                Theme::list().join(", ")
            );
            return ExitCode::from(2);
        }
    }

    match run_tui(Box::new(store), cli.theme.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "tasklist failed");
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

/// Run the TUI application.
fn run_tui(store: Box<dyn KeyValueStore>, theme: Option<&str>) -> Result<()> {
    // Set panic hook to ensure terminal cleanup
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));

    let mut app = App::new(store, theme);

    // Setup terminal with RAII guard
    let _guard = TerminalGuard::new().context("Failed to set up terminal")?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    run_loop(&mut terminal, &mut app)
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Only redraw if dirty or on resize
        if app.ui.dirty {
            terminal.draw(|frame| render(frame, app))?;
            app.clear_dirty();
        }

        // Poll for events with timeout
        if event::poll(Duration::from_millis(250))? {
            let event = event::read()?;

            // Resize always triggers redraw
            if matches!(event, crossterm::event::Event::Resize(_, _)) {
                app.mark_dirty();
            }

            handle_input(app, event);
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(count = app.items().len(), "tasklist exiting");
    Ok(())
}
