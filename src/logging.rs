//! Logging setup.
//!
//! The terminal belongs to the UI, so log lines go to a file through a
//! non-blocking writer.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::error::ClientError;

/// Install the global subscriber writing to `log_file`.
///
/// `RUST_LOG` takes precedence over `level`. The returned guard must stay
/// alive for the rest of the program so buffered lines are flushed.
pub fn init_logging(log_file: &Path, level: &str) -> Result<WorkerGuard, ClientError> {
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(false)
        .try_init()
        .map_err(|e| ClientError::Config(format!("logging already initialized: {}", e)))?;

    Ok(guard)
}
