//! Resolver configuration domain models.

use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, ApplicationResourceMatcher};

/// Configuration for the resolver and its AWS collaborators.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    /// AWS region both services are called in.
    #[serde(default = "default_region")]
    pub region: String,
    /// Override for the CloudFormation endpoint.
    #[serde(default)]
    pub cloudformation_endpoint: Option<String>,
    /// Override for the AppRegistry endpoint.
    #[serde(default)]
    pub registry_endpoint: Option<String>,
    /// Logical-id prefix of the application-bearing resource.
    #[serde(default)]
    pub application_logical_id_prefix: Option<String>,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            cloudformation_endpoint: None,
            registry_endpoint: None,
            application_logical_id_prefix: None,
            timeout_secs: default_timeout(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ResolverConfig {
    pub fn resource_matcher(&self) -> ApplicationResourceMatcher {
        ApplicationResourceMatcher::from_prefix(self.application_logical_id_prefix.as_deref())
    }

    pub fn cloudformation_url(&self) -> Result<Url, AppError> {
        endpoint_url(
            self.cloudformation_endpoint.as_deref(),
            &format!("https://cloudformation.{}.amazonaws.com/", self.region),
        )
    }

    pub fn registry_url(&self) -> Result<Url, AppError> {
        endpoint_url(
            self.registry_endpoint.as_deref(),
            &format!("https://servicecatalog-appregistry.{}.amazonaws.com/", self.region),
        )
    }

    /// Check values that serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.region.trim().is_empty() {
            return Err(AppError::config_error("region must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than zero"));
        }
        self.cloudformation_url()?;
        self.registry_url()?;
        Ok(())
    }
}

fn endpoint_url(custom: Option<&str>, default: &str) -> Result<Url, AppError> {
    let raw = custom.unwrap_or(default);
    Url::parse(raw).map_err(|e| AppError::config_error(format!("Invalid endpoint '{raw}': {e}")))
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_timeout() -> u64 {
    10
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `appreg_resolver=debug`.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_level(), format: LogFormat::default() }
    }
}

fn default_level() -> String {
    "info".to_string()
}
