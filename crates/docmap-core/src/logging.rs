//! Logging: append to `docmap.log` under the XDG state dir, or stderr when that is unusable.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter used for the log file unless `RUST_LOG` is set.
pub const FILE_FILTER: &str = "info,docmap=debug";
/// Stderr shares the terminal with command output, so only warnings by default.
pub const STDERR_FILTER: &str = "warn";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// `~/.local/state/docmap/docmap.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("docmap")?;
    Ok(xdg_dirs.get_state_home().join("docmap.log"))
}

/// Open `path` for appending, creating its directory first.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create log dir: {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file: {}", path.display()))
}

/// Install the file subscriber. Returns the log path; on error nothing is installed
/// and the caller can fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(FILE_FILTER))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install file logger: {e}"))?;

    tracing::debug!("docmap logging to {}", path.display());
    Ok(path)
}

pub fn init_logging_stderr() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(STDERR_FILTER))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install stderr logger: {e}"))
}
