//! Stack resource descriptors returned by stack introspection.

use serde::{Deserialize, Deserializer, Serialize};

/// One resource belonging to a deployed stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackResourceDescriptor {
    /// Template-level identifier of the resource.
    pub logical_resource_id: String,
    /// Identifier assigned by the owning service. Empty while the resource is
    /// still being created.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub physical_resource_id: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl StackResourceDescriptor {
    pub fn new(logical_resource_id: impl Into<String>, physical_resource_id: impl Into<String>) -> Self {
        Self {
            logical_resource_id: logical_resource_id.into(),
            physical_resource_id: physical_resource_id.into(),
        }
    }

    pub fn has_physical_id(&self) -> bool {
        !self.physical_resource_id.trim().is_empty()
    }
}

/// Convention used to pick the application-bearing resource out of a stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ApplicationResourceMatcher {
    /// First resource with a physical id.
    #[default]
    FirstResource,
    /// First resource whose logical id starts with the prefix.
    LogicalIdPrefix(String),
}

impl ApplicationResourceMatcher {
    /// Build a matcher from an optional configured prefix. Blank prefixes match everything.
    pub fn from_prefix(prefix: Option<&str>) -> Self {
        match prefix.map(str::trim) {
            Some(prefix) if !prefix.is_empty() => Self::LogicalIdPrefix(prefix.to_string()),
            _ => Self::FirstResource,
        }
    }

    pub fn matches(&self, resource: &StackResourceDescriptor) -> bool {
        if !resource.has_physical_id() {
            return false;
        }
        match self {
            Self::FirstResource => true,
            Self::LogicalIdPrefix(prefix) => resource.logical_resource_id.starts_with(prefix.as_str()),
        }
    }

    /// Scan resources in order and return the first candidate.
    pub fn find<'a>(
        &self,
        resources: &'a [StackResourceDescriptor],
    ) -> Option<&'a StackResourceDescriptor> {
        resources.iter().find(|resource| self.matches(resource))
    }
}
