//! AppRegistry application lookups over the REST JSON API.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use url::Url;

use crate::adapters::aws::{self, AwsCredentials, RequestSigner};
use crate::domain::{AppError, ApplicationRecord, ResolverConfig};
use crate::ports::ApplicationRegistry;

const SERVICE: &str = "AppRegistry";
const SIGNING_NAME: &str = "servicecatalog";

/// HTTP transport for `GetApplication`.
#[derive(Debug, Clone)]
pub struct HttpApplicationRegistry {
    endpoint: Url,
    signer: RequestSigner,
    client: Client,
}

impl HttpApplicationRegistry {
    pub fn new(credentials: AwsCredentials, config: &ResolverConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                AppError::aws_api(SERVICE, None, format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            endpoint: config.registry_url()?,
            signer: RequestSigner::new(credentials, config.region.clone(), SIGNING_NAME),
            client,
        })
    }

    fn application_url(&self, application: &str) -> Result<Url, AppError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::config_error(format!("Registry endpoint cannot be a base: {}", self.endpoint))
            })?
            .pop_if_empty()
            .push("applications")
            .push(application);
        Ok(url)
    }
}

impl ApplicationRegistry for HttpApplicationRegistry {
    fn get_application(&self, application: &str) -> Result<ApplicationRecord, AppError> {
        let url = self.application_url(application)?;
        let headers = self.signer.sign("GET", &url, &[], b"", chrono::Utc::now());

        let request = self.client.get(url).header(ACCEPT, "application/json");
        let response = aws::with_signed_headers(request, headers)
            .send()
            .map_err(|e| AppError::aws_api(SERVICE, None, format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body_text = response.text().map_err(|e| {
            AppError::aws_api(
                SERVICE,
                Some(status.as_u16()),
                format!("Failed to read response body: {}", e),
            )
        })?;
        tracing::debug!(service = SERVICE, status = status.as_u16(), application, "GetApplication responded");

        if status == StatusCode::NOT_FOUND {
            return Ok(ApplicationRecord::empty());
        }

        if status.is_success() {
            return serde_json::from_str(&body_text).map_err(|e| {
                AppError::aws_api(
                    SERVICE,
                    Some(status.as_u16()),
                    format!("Failed to parse response: {}", e),
                )
            });
        }

        let message = aws::extract_error_message(&body_text).unwrap_or_else(|| {
            if body_text.trim().is_empty() {
                "GetApplication failed".to_string()
            } else {
                body_text.clone()
            }
        });
        Err(AppError::aws_api(SERVICE, Some(status.as_u16()), message))
    }
}
