//! Application metadata reported by the registry.

use serde::{Deserialize, Serialize};

/// AppRegistry application metadata. An empty record means "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ApplicationRecord {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()) }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The reported name, if present and non-empty.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}
