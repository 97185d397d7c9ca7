//! Log output setup for the binary

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{
    RollingFileAppender,
    Rotation,
};
use tracing_subscriber::EnvFilter;

use super::CliError;
use crate::config::LoggingConfig;

/// Environment variable overriding `logging.level`
pub const LOG_ENV: &str = "VOCAB_LOG";

/// Installs the global subscriber.
///
/// Logs go to stderr, or to a daily file in `logging.directory`, since
/// stdout carries the menu. The returned guard flushes the file writer
/// and must live until the program ends.
///
/// # Errors
/// - The level is not a valid filter
/// - The log directory cannot be created
/// - A global subscriber is already installed
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>, CliError> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| CliError::Logging(e.to_string()))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let Some(directory) = &config.directory else {
        builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| CliError::Logging(e.to_string()))?;
        return Ok(None);
    };

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("vocab-trainer")
        .filename_suffix("log")
        .build(directory)
        .map_err(|e| CliError::Logging(e.to_string()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    builder
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))?;

    tracing::debug!("Logging to {}", directory);
    Ok(Some(guard))
}
