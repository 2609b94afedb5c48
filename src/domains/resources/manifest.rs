//! Resource manifest: the ordered list of advertised resources.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::error::ResourceError;

/// Metadata describing one addressable resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    /// Scheme-qualified opaque identifier, e.g. `docs://onboarding/checklist`.
    pub id: String,

    /// MIME type of the content.
    pub content_type: String,

    /// Human readable name.
    pub display_name: String,

    /// A description of the resource.
    pub description: String,

    /// Grouping used when presenting the catalog.
    pub category: String,
}

impl ResourceDescriptor {
    /// Create a descriptor with an empty description and category.
    pub fn new(
        id: impl Into<String>,
        content_type: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            content_type: content_type.into(),
            display_name: display_name.into(),
            description: String::new(),
            category: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// The scheme segment of the id, if any. Purely informational.
    pub fn scheme(&self) -> Option<&str> {
        self.id.split_once("://").map(|(scheme, _)| scheme)
    }

    /// Last non-empty segment of the id, e.g. `checklist`.
    pub fn slug(&self) -> &str {
        self.id
            .rsplit(|c| c == '/' || c == ':')
            .find(|segment| !segment.is_empty())
            .unwrap_or(&self.id)
    }
}

/// Ordered, duplicate-free collection of resource descriptors.
///
/// Declaration order is preserved and is the order clients see.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceManifest {
    descriptors: Vec<ResourceDescriptor>,
}

impl ResourceManifest {
    /// Build a manifest, rejecting empty and duplicate ids.
    pub fn new(descriptors: Vec<ResourceDescriptor>) -> Result<Self, ResourceError> {
        let mut seen = HashSet::with_capacity(descriptors.len());
        for descriptor in &descriptors {
            if descriptor.id.is_empty() {
                return Err(ResourceError::invalid_uri(
                    "resource id must not be empty",
                ));
            }
            if !seen.insert(descriptor.id.as_str()) {
                return Err(ResourceError::duplicate_id(&descriptor.id));
            }
        }
        Ok(Self { descriptors })
    }

    /// All descriptors in declaration order.
    pub fn descriptors(&self) -> &[ResourceDescriptor] {
        &self.descriptors
    }

    /// Look up a descriptor by exact id.
    pub fn get(&self, id: &str) -> Option<&ResourceDescriptor> {
        self.descriptors.iter().find(|d| d.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// Distinct categories of `descriptors`, in order of first appearance.
pub fn categories(descriptors: &[ResourceDescriptor]) -> Vec<&str> {
    let mut seen = HashSet::new();
    descriptors
        .iter()
        .map(|d| d.category.as_str())
        .filter(|c| seen.insert(*c))
        .collect()
}
