//! Resources domain module.
//!
//! This module handles all resource-related functionality for the server.
//! Resources are read-only documents identified by scheme-qualified URIs
//! such as `docs://onboarding/checklist`.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per document)
//! - `manifest.rs` - Ordered list of advertised descriptors
//! - `store.rs` - Id to content mapping, static or produced on read
//! - `registry.rs` - Manifest and store paired, answering list and read
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file under the profile in `definitions/`
//! 2. Implement the `ResourceDefinition` trait
//! 3. Add it to the profile's `resources()` list
//!
//! **No need to modify `registry.rs`!**

pub mod definitions;
mod error;
mod manifest;
mod registry;
mod store;

pub use definitions::{ResourceDefinition, catalog};
pub use error::ResourceError;
pub use manifest::{ResourceDescriptor, ResourceManifest};
pub use registry::{ResolvedResource, ResourceEntry, ResourceRegistry};
pub use store::{ContentFn, ResourceContent, ResourceStore};
