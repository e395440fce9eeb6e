//! Non-interactive task commands.

use std::io::Write;
use std::process::ExitCode;

use clap::Subcommand;

use crate::core::{
    snapshot, ItemInput, KeyValueStore, ListError, ListManager, RemoveOutcome, VisualList,
};

/// Task subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the stored tasks
    List {
        /// Print the raw JSON snapshot instead of a numbered list
        #[arg(long)]
        json: bool,
    },
    /// Add a task (words are joined with spaces)
    Add {
        /// Task text
        #[arg(required = true, num_args = 1.., value_name = "TEXT")]
        text: Vec<String>,
    },
    /// Remove the first task equal to TEXT
    Remove {
        /// Task text to remove
        #[arg(value_name = "TEXT")]
        text: String,
    },
}

/// Run a task subcommand against `store`, writing to stdout/stderr.
pub fn run_command<S: KeyValueStore>(store: S, command: Command) -> ExitCode {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run_command_with(store, command, &mut stdout.lock(), &mut stderr.lock())
}

/// Run a task subcommand with explicit output streams.
pub fn run_command_with<S: KeyValueStore>(
    store: S,
    command: Command,
    out: &mut impl Write,
    err: &mut impl Write,
) -> ExitCode {
    let mut view = VisualList::new();
    let mut manager = ListManager::new(store);
    manager.initialize(&mut view);

    let result = match command {
        Command::List { json } => cmd_list(&manager, json, out),
        Command::Add { text } => cmd_add(&mut manager, &mut view, &text.join(" "), out, err),
        Command::Remove { text } => cmd_remove(&mut manager, &mut view, &text, out, err),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn cmd_list<S: KeyValueStore>(
    manager: &ListManager<S>,
    json: bool,
    out: &mut impl Write,
) -> std::io::Result<ExitCode> {
    if json {
        writeln!(out, "{}", snapshot::encode(manager.items()))?;
        return Ok(ExitCode::SUCCESS);
    }

    if manager.is_empty() {
        writeln!(out, "No tasks")?;
        return Ok(ExitCode::SUCCESS);
    }

    let width = manager.len().to_string().len();
    for (i, item) in manager.items().iter().enumerate() {
        writeln!(out, "{:>width$}. {}", i + 1, item, width = width)?;
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_add<S: KeyValueStore>(
    manager: &mut ListManager<S>,
    view: &mut VisualList,
    text: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<ExitCode> {
    match manager.add_item(view, ItemInput::explicit(text)) {
        Ok(item) => {
            writeln!(out, "Added: {}", item)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(ListError::EmptyInput) => {
            while let Some(alert) = view.take_alert() {
                writeln!(err, "{}", alert)?;
            }
            Ok(ExitCode::from(1))
        }
        Err(e) => {
            writeln!(err, "Error: {}", e)?;
            Ok(ExitCode::from(1))
        }
    }
}

fn cmd_remove<S: KeyValueStore>(
    manager: &mut ListManager<S>,
    view: &mut VisualList,
    text: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<ExitCode> {
    let text = text.trim();
    let Some(request) = view.find(text).map(|row| row.remove_request()) else {
        writeln!(err, "No task matching: {}", text)?;
        return Ok(ExitCode::from(1));
    };

    match manager.remove_item(view, &request) {
        Ok(RemoveOutcome::Removed) => {
            writeln!(out, "Removed: {}", request.text)?;
            Ok(ExitCode::SUCCESS)
        }
        Ok(RemoveOutcome::Stale) => {
            writeln!(err, "No task matching: {}", text)?;
            Ok(ExitCode::from(1))
        }
        Err(e) => {
            writeln!(err, "Error: {}", e)?;
            Ok(ExitCode::from(1))
        }
    }
}
