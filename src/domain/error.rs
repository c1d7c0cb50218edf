use std::io;

use thiserror::Error;

/// Library-wide error type for appreg-resolver operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Required environment variable is not set.
    #[error("Environment variable '{0}' is not set")]
    EnvironmentVariableMissing(String),

    /// Custom-resource event could not be understood.
    #[error("Malformed custom-resource event: {0}")]
    MalformedEvent(String),

    /// Action-specific property missing from `ResourceProperties`.
    #[error("Missing resource property '{property}' for action {action}")]
    MissingResourceProperty { action: String, property: String },

    /// Custom action is not handled by this function.
    #[error("Unsupported custom action: {0}")]
    UnsupportedAction(String),

    /// AWS service call failed.
    #[error("{service} request failed{}: {message}", status_suffix(.status))]
    AwsApi { service: String, status: Option<u16>, message: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" (HTTP {code})")).unwrap_or_default()
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn aws_api<S: Into<String>, M: Into<String>>(
        service: S,
        status: Option<u16>,
        message: M,
    ) -> Self {
        AppError::AwsApi { service: service.into(), status, message: message.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::MalformedEvent(_)
            | AppError::MissingResourceProperty { .. }
            | AppError::UnsupportedAction(_)
            | AppError::ParseError { .. }
            | AppError::Json(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::EnvironmentVariableMissing(_) => io::ErrorKind::NotFound,
            AppError::AwsApi { .. } => io::ErrorKind::Other,
        }
    }
}
