//! Tracing setup
//!
//! The TUI owns the terminal, so it only ever logs to a file. Line-oriented
//! commands fall back to stderr when no log file is configured.

use crate::config::Config;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use tracing_appender::non_blocking::WorkerGuard;

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Configured file, or nothing
    FileOnly,
    /// Configured file, or stderr
    FileOrStderr,
}

/// Install the global tracing subscriber
///
/// The returned guard flushes buffered lines on drop; keep it alive for the
/// whole run.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init(config: &Config, sink: LogSink) -> Result<Option<WorkerGuard>> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_target(false);

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        let (writer, guard) = tracing_appender::non_blocking(file);

        subscriber
            .with_ansi(false)
            .with_writer(writer)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(Some(guard));
    }

    if sink == LogSink::FileOrStderr {
        subscriber
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
    }

    Ok(None)
}
