//! File logging setup
//!
//! The TUI owns the terminal, so logs only ever go to a file.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install a subscriber writing to `path`
///
/// The filter defaults to `info` and honors `RUST_LOG`. Keep the returned guard
/// alive for as long as logs should be flushed.
///
/// # Errors
///
/// Returns an error if the path has no file name, its directory cannot be
/// created, or a global subscriber is already installed.
pub fn init_file_logging(path: &Path) -> Result<WorkerGuard> {
    let file_name = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install log subscriber")?;

    tracing::info!(path = %path.display(), "logging initialized");

    Ok(guard)
}
