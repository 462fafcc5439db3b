// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup.
//!
//! Events go to stderr and, when a log directory can be created, to a daily
//! rolling `hakka_showcase.log` file. `RUST_LOG` overrides the default
//! `hakka_showcase=info` filter.

use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "hakka_showcase=info";
const LOG_FILE_PREFIX: &str = "hakka_showcase.log";

/// Keeps the file writer alive; drop it on shutdown to flush buffered lines.
pub struct LoggingGuard {
    _guard: Option<WorkerGuard>,
    log_dir: Option<PathBuf>,
}

impl LoggingGuard {
    /// Directory of the log file, if file logging is active.
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

/// Installs the global subscriber.
///
/// Returns `None` when a subscriber is already installed.
pub fn init(log_dir: Option<PathBuf>) -> Option<LoggingGuard> {
    let log_dir = log_dir.filter(|dir| std::fs::create_dir_all(dir).is_ok());

    let (file_layer, guard) = match &log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer);

    if subscriber.try_init().is_err() {
        return None;
    }

    match &log_dir {
        Some(dir) => tracing::info!(log_dir = %dir.display(), "tracing initialized"),
        None => tracing::info!("tracing initialized without log file"),
    }

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
    })
}
