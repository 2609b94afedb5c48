//! Resource registry.
//!
//! The registry pairs the manifest with the content store and answers the
//! two resource queries: "what exists" and "give me the content for X".
//! It is built once at startup and is read-only afterwards.

use std::borrow::Cow;
use tracing::{info, warn};

use super::error::ResourceError;
use super::manifest::{ResourceDescriptor, ResourceManifest};
use super::store::{ResourceContent, ResourceStore};

/// A manifest descriptor together with its content.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub descriptor: ResourceDescriptor,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Content resolved for a read request.
#[derive(Debug, Clone)]
pub struct ResolvedResource<'a> {
    pub descriptor: &'a ResourceDescriptor,
    pub text: Cow<'a, str>,
}

/// Immutable catalog of readable resources.
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
    manifest: ResourceManifest,
    store: ResourceStore,
}

impl ResourceRegistry {
    /// Pair a manifest with its store.
    ///
    /// Every manifest id must have content. Store entries without a
    /// descriptor are unreachable and are dropped with a warning.
    pub fn new(manifest: ResourceManifest, mut store: ResourceStore) -> Result<Self, ResourceError> {
        if let Some(missing) = manifest.iter().find(|d| !store.contains(&d.id)) {
            return Err(ResourceError::missing_content(&missing.id));
        }

        let orphans: Vec<String> = store
            .ids()
            .filter(|id| manifest.get(id).is_none())
            .map(str::to_string)
            .collect();
        for id in orphans {
            warn!("Dropping content without a manifest entry: {}", id);
            store.remove(&id);
        }

        info!("Registered {} resources", manifest.len());
        Ok(Self { manifest, store })
    }

    /// Build a registry from descriptor/content pairs in declaration order.
    pub fn from_entries(
        entries: impl IntoIterator<Item = ResourceEntry>,
    ) -> Result<Self, ResourceError> {
        let mut descriptors = Vec::new();
        let mut store = ResourceStore::new();

        for entry in entries {
            info!("Registering resource: {}", entry.descriptor.id);
            store.insert(entry.descriptor.id.clone(), entry.content);
            descriptors.push(entry.descriptor);
        }

        Self::new(ResourceManifest::new(descriptors)?, store)
    }

    /// The manifest, unmodified and in declaration order.
    pub fn list_resources(&self) -> &[ResourceDescriptor] {
        self.manifest.descriptors()
    }

    pub fn manifest(&self) -> &ResourceManifest {
        &self.manifest
    }

    /// Resolve the content for `id` by exact match.
    pub fn get_resource(&self, id: &str) -> Result<ResolvedResource<'_>, ResourceError> {
        if id.is_empty() {
            return Err(ResourceError::invalid_uri("resource id must not be empty"));
        }

        let descriptor = self
            .manifest
            .get(id)
            .ok_or_else(|| ResourceError::not_found(id))?;
        let content = self
            .store
            .get(id)
            .ok_or_else(|| ResourceError::internal(format!("store has no entry for {}", id)))?;

        Ok(ResolvedResource {
            descriptor,
            text: content.resolve(),
        })
    }

    pub fn len(&self) -> usize {
        self.manifest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.manifest.is_empty()
    }
}
