//! Structured Logger
//!
//! Wraps `tracing` with a console layer, a daily-rolling NDJSON file, and
//! environment-based level control.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// File name prefix of the rolling log.
pub const LOG_FILE_NAME: &str = "chatline.log";

/// Initialize the global structured logger.
/// `RUST_LOG` wins over `level` when set. Calling twice is a no-op.
pub fn init_logger<P: AsRef<Path>>(log_dir: P, level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    // Writes `chatline.log.YYYY-MM-DD`
    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_NAME);

    let file_layer = fmt::layer()
        .json()
        .with_writer(file_appender)
        .with_ansi(false);

    // Console goes to stderr; stdout carries the REPL output.
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Console-only logger for runs without a log directory.
pub fn init_console_logger(level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
