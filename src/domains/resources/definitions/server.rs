//! Generated resources describing the server and its catalog.
//!
//! Unlike the static documents these are produced when read, from a
//! snapshot of the manifest taken at startup.

use serde_json::json;
use std::sync::Arc;

use crate::core::config::{CatalogProfile, ServerConfig};
use crate::domains::resources::manifest::{ResourceDescriptor, categories};
use crate::domains::resources::registry::ResourceEntry;
use crate::domains::resources::store::ResourceContent;

pub const SERVER_INFO_URI: &str = "docs://server/info";
pub const INDEX_URI: &str = "docs://server/index";

const CATEGORY: &str = "server";

fn info_descriptor() -> ResourceDescriptor {
    ResourceDescriptor::new(SERVER_INFO_URI, "application/json", "Server Information")
        .with_description("Name, version and catalog profile of this documentation server")
        .with_category(CATEGORY)
}

fn index_descriptor() -> ResourceDescriptor {
    ResourceDescriptor::new(INDEX_URI, "text/markdown", "Documentation Index")
        .with_description("Every resource served here, grouped by category")
        .with_category(CATEGORY)
}

/// Append the server info and index resources to `documents`.
///
/// `prompt_count` is the size of the prompt catalog served alongside.
pub fn with_server_resources(
    mut documents: Vec<ResourceEntry>,
    profile: CatalogProfile,
    server: &ServerConfig,
    prompt_count: usize,
) -> Vec<ResourceEntry> {
    let mut snapshot: Vec<ResourceDescriptor> =
        documents.iter().map(|e| e.descriptor.clone()).collect();
    snapshot.push(info_descriptor());
    snapshot.push(index_descriptor());
    let snapshot = Arc::new(snapshot);

    let info_snapshot = snapshot.clone();
    let name = server.name.clone();
    let version = server.version.clone();
    documents.push(ResourceEntry {
        descriptor: info_descriptor(),
        content: ResourceContent::lazy(move || {
            render_server_info(&name, &version, profile, &info_snapshot, prompt_count)
        }),
    });

    let title = format!("{} documentation", profile);
    documents.push(ResourceEntry {
        descriptor: index_descriptor(),
        content: ResourceContent::lazy(move || render_index(&title, &snapshot)),
    });

    documents
}

/// JSON summary of the running server.
pub fn render_server_info(
    name: &str,
    version: &str,
    profile: CatalogProfile,
    descriptors: &[ResourceDescriptor],
    prompt_count: usize,
) -> String {
    let info = json!({
        "server": name,
        "version": version,
        "profile": profile.as_str(),
        "resources": descriptors.len(),
        "prompts": prompt_count,
        "categories": categories(descriptors),
    });
    format!("{:#}", info)
}

/// Markdown index grouped by category, preserving manifest order.
pub fn render_index(title: &str, descriptors: &[ResourceDescriptor]) -> String {
    let mut out = format!("# {}\n", capitalize(title));

    for category in categories(descriptors) {
        out.push_str(&format!("\n## {}\n\n", capitalize(category)));
        for d in descriptors.iter().filter(|d| d.category == category) {
            if d.description.is_empty() {
                out.push_str(&format!("- [{}]({})\n", d.display_name, d.id));
            } else {
                out.push_str(&format!(
                    "- [{}]({}): {}\n",
                    d.display_name, d.id, d.description
                ));
            }
        }
    }

    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
