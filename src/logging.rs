//! Tracing setup.
//!
//! The filter comes from `FOLIO_LOG` when set, otherwise `info` (or `debug`
//! with `--verbose`). The interactive view owns the terminal, so it logs to a
//! file in the config directory; CLI subcommands log to stderr.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::branding::{APP_BINARY_NAME, LOG_FILTER_ENV};
use crate::config::Config;

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// `folio.log` in the config directory, appended
    File,
}

fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| default.into())
}

/// Path of the interactive session log.
pub fn log_file_path() -> Result<PathBuf> {
    Ok(Config::config_dir()?.join(format!("{APP_BINARY_NAME}.log")))
}

/// Installs the global subscriber.
///
/// Fails if a subscriber is already installed or the log file cannot be
/// opened.
pub fn init(target: LogTarget, verbose: bool) -> Result<()> {
    let registry = tracing_subscriber::registry().with(filter(verbose));
    match target {
        LogTarget::Stderr => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .context("Failed to install log subscriber")?,
        LogTarget::File => {
            let path = log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create log directory: {}", parent.display())
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
                .context("Failed to install log subscriber")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_in_config_dir() {
        let path = log_file_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "folio.log");
        assert_eq!(path.parent().unwrap(), Config::config_dir().unwrap());
    }
}
