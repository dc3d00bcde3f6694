use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, AppResult};

pub const LOG_FILTER_ENV: &str = "PAGER_LOG";
const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber. The terminal owns stdout/stderr, so
/// without a log file nothing is installed and `false` is returned.
pub fn init_logging(log_file: Option<&Path>) -> AppResult<bool> {
    let Some(path) = log_file else {
        return Ok(false);
    };
    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(std::env::var(LOG_FILTER_ENV).ok()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| AppError::unsupported(format!("logging already initialized: {err}")))?;
    Ok(true)
}

fn open_log_file(path: &Path) -> AppResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| {
            AppError::io_with_context(
                source,
                format!("failed to open log file: {}", path.display()),
            )
        })
}

fn env_filter(directives: Option<String>) -> EnvFilter {
    directives
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
