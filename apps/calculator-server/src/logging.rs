//! Logging initialization.
//!
//! Installs one global `tracing` subscriber before any request is served.
//! Every sink goes through a non-blocking `tracing-appender` writer so that a
//! slow or failing sink never stalls request handling; the returned guard
//! flushes them on drop and must be kept alive for the process lifetime.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::{LogFormat, LoggingConfig};

/// Keeps the non-blocking log writers alive.
#[must_use = "dropping the guard stops log output"]
pub struct LoggingGuard {
    _guards: Vec<WorkerGuard>,
}

/// Console filter directive for the `-v` count, if it raises the level.
fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Console filter: `RUST_LOG` wins, then `-v`, then the configured level.
fn console_filter(cfg: &LoggingConfig, verbose: u8) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directive = verbosity_level(verbose).unwrap_or(cfg.console_level.as_str());
    EnvFilter::try_new(directive)
        .with_context(|| format!("invalid logging.console_level '{directive}'"))
}

/// Install the global subscriber.
///
/// # Errors
/// Returns an error if a level directive is invalid, the log file location
/// cannot be used, or a global subscriber is already installed.
pub fn init_logging(cfg: &LoggingConfig, verbose: u8) -> Result<LoggingGuard> {
    let mut guards = Vec::new();

    let (console_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    guards.push(guard);
    let console_layer = match cfg.console_format {
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_writer(console_writer)
            .with_target(true)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(console_writer)
            .boxed(),
    }
    .with_filter(console_filter(cfg, verbose)?);

    let file_layer = match &cfg.file {
        Some(path) => {
            let (dir, file_name) = split_log_path(path)?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (file_writer, guard) = tracing_appender::non_blocking(appender);
            guards.push(guard);

            let filter = EnvFilter::try_new(&cfg.file_level)
                .with_context(|| format!("invalid logging.file_level '{}'", cfg.file_level))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(file_writer)
                    .with_filter(filter),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install global tracing subscriber")?;

    Ok(LoggingGuard { _guards: guards })
}

fn split_log_path(path: &Path) -> Result<(&Path, &std::ffi::OsStr)> {
    let file_name = path
        .file_name()
        .with_context(|| format!("logging.file '{}' has no file name", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok((dir, file_name))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(verbosity_level(0), None);
        assert_eq!(verbosity_level(1), Some("info"));
        assert_eq!(verbosity_level(2), Some("debug"));
        assert_eq!(verbosity_level(5), Some("trace"));
    }

    #[test]
    fn log_path_is_split_into_dir_and_name() {
        let (dir, name) = split_log_path(Path::new("logs/calculator.log")).unwrap();
        assert_eq!(dir, Path::new("logs"));
        assert_eq!(name, "calculator.log");

        let (dir, name) = split_log_path(Path::new("calculator.log")).unwrap();
        assert_eq!(dir, Path::new("."));
        assert_eq!(name, "calculator.log");
    }

    #[test]
    fn path_without_file_name_is_rejected() {
        assert!(split_log_path(Path::new("/")).is_err());
    }
}
