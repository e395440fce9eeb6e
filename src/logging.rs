//! Tracing subscriber setup.
//!
//! The terminal belongs to the UI, so diagnostics go to a log file.
//! Filtering follows `RUST_LOG`, defaulting to `info`.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Default log file location under the user cache directory.
pub fn default_log_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "tasklist")
        .map(|d| d.cache_dir().join("tasklist.log"))
        .unwrap_or_else(|| std::env::temp_dir().join("tasklist.log"))
}

/// Install the global subscriber writing to `log_file_path`.
///
/// Returns false if the log file could not be created or a subscriber is
/// already installed; the program keeps running without logs.
pub fn init_global(log_file_path: &Path) -> bool {
    if let Some(parent) = log_file_path.parent() {
        if !parent.as_os_str().is_empty() && std::fs::create_dir_all(parent).is_err() {
            return false;
        }
    }
    let Ok(log_file) = File::create(log_file_path) else {
        return false;
    };

    build_subscriber(log_file).try_init().is_ok()
}

/// Build a subscriber that writes formatted events to `log_file`.
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}
