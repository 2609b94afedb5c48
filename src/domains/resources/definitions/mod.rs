//! Resource definitions module.
//!
//! Each resource is defined in its own file with:
//! - URI and metadata
//! - Content provider
//!
//! Resources are grouped by the catalog profile that serves them.
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file in the profile directory (e.g., `onboarding/my_doc.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export it from the profile's `mod.rs` and add it to its `resources()` list

pub mod engineering;
pub mod onboarding;
pub mod server;

use super::manifest::ResourceDescriptor;
use super::registry::ResourceEntry;
use super::store::ResourceContent;
use crate::core::config::{CatalogProfile, ServerConfig};

/// Trait for resource definitions.
///
/// Each resource must implement this trait to provide its metadata and content.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// The catalog category the resource is listed under.
    const CATEGORY: &'static str;

    /// Get the content for this resource.
    fn content() -> ResourceContent;

    /// The manifest descriptor for this resource.
    fn descriptor() -> ResourceDescriptor {
        ResourceDescriptor::new(Self::URI, Self::MIME_TYPE, Self::NAME)
            .with_description(Self::DESCRIPTION)
            .with_category(Self::CATEGORY)
    }
}

/// Build a registry entry from a definition.
pub fn entry<R: ResourceDefinition>() -> ResourceEntry {
    ResourceEntry {
        descriptor: R::descriptor(),
        content: R::content(),
    }
}

/// The static documents served by `profile`, in listing order.
pub fn profile_resources(profile: CatalogProfile) -> Vec<ResourceEntry> {
    match profile {
        CatalogProfile::Onboarding => onboarding::resources(),
        CatalogProfile::Engineering => engineering::resources(),
    }
}

/// Every resource served by `profile`: its documents followed by the
/// generated server resources, which report `prompt_count` prompts.
pub fn catalog(
    profile: CatalogProfile,
    server_config: &ServerConfig,
    prompt_count: usize,
) -> Vec<ResourceEntry> {
    server::with_server_resources(
        profile_resources(profile),
        profile,
        server_config,
        prompt_count,
    )
}
