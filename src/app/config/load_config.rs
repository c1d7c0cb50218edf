//! Resolver configuration loading from file and environment.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, LogFormat, ResolverConfig};

/// Load configuration from an optional TOML file, then apply environment overrides.
pub fn load_config(path: Option<&Path>) -> Result<ResolverConfig, AppError> {
    let mut config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            parse_config_content(&fs::read_to_string(path)?)?
        }
        None => ResolverConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from TOML text.
pub fn parse_config_content(content: &str) -> Result<ResolverConfig, AppError> {
    Ok(toml::from_str(content)?)
}

/// Overlay values from the environment. Empty variables are ignored.
pub fn apply_env_overrides<F>(config: &mut ResolverConfig, lookup: F) -> Result<(), AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(region) = var("AWS_REGION").or_else(|| var("AWS_DEFAULT_REGION")) {
        config.region = region;
    }
    if let Some(endpoint) = var("APPREG_CLOUDFORMATION_ENDPOINT") {
        config.cloudformation_endpoint = Some(endpoint);
    }
    if let Some(endpoint) = var("APPREG_REGISTRY_ENDPOINT") {
        config.registry_endpoint = Some(endpoint);
    }
    if let Some(prefix) = var("APPREG_APPLICATION_LOGICAL_ID_PREFIX") {
        config.application_logical_id_prefix = Some(prefix);
    }
    if let Some(raw) = var("APPREG_TIMEOUT_SECS") {
        config.timeout_secs = raw.trim().parse().map_err(|_| AppError::ParseError {
            what: "APPREG_TIMEOUT_SECS".into(),
            details: format!("'{raw}' is not a whole number of seconds"),
        })?;
    }
    if let Some(level) = var("APPREG_LOG") {
        config.logging.level = level;
    }
    if let Some(format) = var("APPREG_LOG_FORMAT") {
        config.logging.format = match format.trim().to_ascii_lowercase().as_str() {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => {
                return Err(AppError::ParseError {
                    what: "APPREG_LOG_FORMAT".into(),
                    details: format!("'{other}' is not one of text, json"),
                });
            }
        };
    }

    Ok(())
}
