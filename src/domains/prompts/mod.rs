//! Prompts domain module.
//!
//! This module handles all prompt-related functionality for the server.
//! Prompts are named templates that render, given a few arguments, into
//! user messages ready to send to a language model.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual prompt definitions (one file per prompt)
//! - `catalog.rs` - Prompt and argument descriptors
//! - `templates.rs` - Segment templates and the rendering fold
//! - `registry.rs` - Catalog and templates paired, answering list and render
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file under the profile in `definitions/`
//! 2. Implement the `PromptDefinition` trait
//! 3. Add it to the profile's `prompts()` list
//!
//! **No need to modify `registry.rs`!**

mod catalog;
pub mod definitions;
mod error;
mod registry;
pub mod templates;

pub use catalog::{ArgumentDescriptor, PromptArguments, PromptDescriptor, arguments_from_json};
pub use definitions::PromptDefinition;
pub use error::PromptError;
pub use registry::{PromptEntry, PromptRegistry};
pub use templates::{MessageFragment, PromptTemplate, RenderedPrompt, Role, Template};
