//! Resolution request and result models.

use serde::{Deserialize, Serialize};

/// Caller-supplied input for one name resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    pub stack_id: String,
    pub default_name: String,
}

impl ResolutionRequest {
    pub fn new(stack_id: impl Into<String>, default_name: impl Into<String>) -> Self {
        Self { stack_id: stack_id.into(), default_name: default_name.into() }
    }
}

/// Effective application name. Serializes as the custom-resource `Data` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    #[serde(rename = "ApplicationName")]
    pub application_name: String,
}

impl ResolutionResult {
    pub fn new(application_name: impl Into<String>) -> Self {
        Self { application_name: application_name.into() }
    }

    pub(crate) fn fallback(request: &ResolutionRequest) -> Self {
        Self::new(request.default_name.clone())
    }
}
