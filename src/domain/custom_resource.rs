//! CloudFormation custom-resource request and response envelopes.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::AppError;

/// Lifecycle event that triggered the custom resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestType {
    Create,
    Update,
    Delete,
}

/// Action requested through `ResourceProperties.CustomAction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CustomAction {
    GetAppRegApplicationName,
    Unsupported(String),
}

impl CustomAction {
    pub fn as_str(&self) -> &str {
        match self {
            CustomAction::GetAppRegApplicationName => "GET_APP_REG_APPLICATION_NAME",
            CustomAction::Unsupported(name) => name,
        }
    }
}

impl From<String> for CustomAction {
    fn from(value: String) -> Self {
        match value.as_str() {
            "GET_APP_REG_APPLICATION_NAME" => CustomAction::GetAppRegApplicationName,
            _ => CustomAction::Unsupported(value),
        }
    }
}

impl From<CustomAction> for String {
    fn from(value: CustomAction) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for CustomAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Properties passed from the template to the custom resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceProperties {
    #[serde(rename = "CustomAction")]
    pub custom_action: CustomAction,
    /// Action-specific properties, including the `ServiceToken` CloudFormation injects.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResourceProperties {
    pub fn new(custom_action: CustomAction) -> Self {
        Self { custom_action, extra: Map::new() }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Read a required string property for the current action.
    pub fn require_str(&self, property: &str) -> Result<&str, AppError> {
        self.extra.get(property).and_then(Value::as_str).ok_or_else(|| {
            AppError::MissingResourceProperty {
                action: self.custom_action.to_string(),
                property: property.to_string(),
            }
        })
    }
}

/// Request envelope CloudFormation sends to the custom-resource function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResourceRequest {
    pub request_type: RequestType,
    #[serde(rename = "ResponseURL")]
    pub response_url: String,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_resource_id: Option<String>,
    pub resource_properties: ResourceProperties,
}

impl CustomResourceRequest {
    /// Parse an event from its JSON text.
    pub fn from_json(content: &str) -> Result<Self, AppError> {
        serde_json::from_str(content).map_err(|e| AppError::MalformedEvent(e.to_string()))
    }

    pub fn custom_action(&self) -> &CustomAction {
        &self.resource_properties.custom_action
    }
}

/// Outcome reported back to CloudFormation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Success,
    Failed,
}

/// Response envelope produced for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResourceResponse {
    pub status: ResponseStatus,
    pub data: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CustomResourceResponse {
    pub fn success(data: Map<String, Value>) -> Self {
        Self { status: ResponseStatus::Success, data, reason: None }
    }

    /// Successful response whose `Data` is the serialized payload.
    pub fn success_with<T: Serialize>(payload: &T) -> Result<Self, AppError> {
        match serde_json::to_value(payload)? {
            Value::Object(data) => Ok(Self::success(data)),
            other => Err(AppError::ParseError {
                what: "response data".into(),
                details: format!("expected a JSON object, got {other}"),
            }),
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self { status: ResponseStatus::Failed, data: Map::new(), reason: Some(reason.into()) }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}
