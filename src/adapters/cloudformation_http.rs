//! CloudFormation stack introspection over the AWS Query API.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use url::Url;
use url::form_urlencoded;

use crate::adapters::aws::{self, AwsCredentials, RequestSigner};
use crate::domain::{AppError, ResolverConfig, StackResourceDescriptor};
use crate::ports::StackIntrospector;

const SERVICE: &str = "CloudFormation";
const SIGNING_NAME: &str = "cloudformation";
const API_VERSION: &str = "2010-05-15";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

/// HTTP transport for `DescribeStackResources`.
///
/// One request per call; CloudFormation returns at most 100 resources here and
/// the call has no continuation token.
#[derive(Debug, Clone)]
pub struct HttpStackIntrospector {
    endpoint: Url,
    signer: RequestSigner,
    client: Client,
}

impl HttpStackIntrospector {
    pub fn new(credentials: AwsCredentials, config: &ResolverConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                AppError::aws_api(SERVICE, None, format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            endpoint: config.cloudformation_url()?,
            signer: RequestSigner::new(credentials, config.region.clone(), SIGNING_NAME),
            client,
        })
    }

    fn send_request(&self, body: String) -> Result<DescribeStackResourcesResult, AppError> {
        let headers = self.signer.sign(
            "POST",
            &self.endpoint,
            &[("content-type", FORM_CONTENT_TYPE)],
            body.as_bytes(),
            chrono::Utc::now(),
        );

        let request = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(ACCEPT, "application/json")
            .body(body);

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
        tracing::debug!(service = SERVICE, status = status.as_u16(), "DescribeStackResources responded");

        if status.is_success() {
            let envelope: DescribeStackResourcesEnvelope =
                serde_json::from_str(&body_text).map_err(|e| {
                    AppError::aws_api(
                        SERVICE,
                        Some(status.as_u16()),
                        format!("Failed to parse response: {}", e),
                    )
                })?;
            return Ok(envelope.response.result);
        }

        let message = aws::extract_error_message(&body_text).unwrap_or_else(|| {
            if body_text.trim().is_empty() {
                "DescribeStackResources failed".to_string()
            } else {
                body_text.clone()
            }
        });
        Err(AppError::aws_api(SERVICE, Some(status.as_u16()), message))
    }
}

fn request_body(stack_id: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("Action", "DescribeStackResources")
        .append_pair("StackName", stack_id)
        .append_pair("Version", API_VERSION)
        .finish()
}

#[derive(Debug, Deserialize)]
struct DescribeStackResourcesEnvelope {
    #[serde(rename = "DescribeStackResourcesResponse")]
    response: DescribeStackResourcesResponse,
}

#[derive(Debug, Deserialize)]
struct DescribeStackResourcesResponse {
    #[serde(rename = "DescribeStackResourcesResult")]
    result: DescribeStackResourcesResult,
}

#[derive(Debug, Deserialize)]
struct DescribeStackResourcesResult {
    #[serde(rename = "StackResources", default)]
    stack_resources: Option<Vec<StackResourceDescriptor>>,
}

impl StackIntrospector for HttpStackIntrospector {
    fn describe_stack_resources(
        &self,
        stack_id: &str,
    ) -> Result<Vec<StackResourceDescriptor>, AppError> {
        let result = self.send_request(request_body(stack_id))?;
        Ok(result.stack_resources.unwrap_or_default())
    }
}
