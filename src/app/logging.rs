//! Tracing subscriber setup for the CLI.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::domain::{AppError, LogFormat, LoggingConfig};

/// Install the global subscriber. Logs go to stderr; stdout carries the response.
///
/// A subscriber installed earlier (e.g. by an embedding host) is left in place.
pub fn init(config: &LoggingConfig) -> Result<(), AppError> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let filter = EnvFilter::try_new(&config.level).map_err(|e| {
        AppError::config_error(format!("Invalid log level '{}': {}", config.level, e))
    })?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(std::io::stderr)
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| AppError::config_error(format!("Failed to initialize logging: {}", e)))
}
