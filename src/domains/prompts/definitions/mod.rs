//! Prompt definitions module.
//!
//! Each prompt is defined in its own file with:
//! - Metadata (name, description, arguments)
//! - A summary template and one or more message templates
//!
//! Placeholders use `{{argument}}` or `{{argument|fallback}}`.
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file under the profile directory (e.g., `onboarding/my_prompt.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Add it to the profile's `prompts()` list

pub mod engineering;
pub mod onboarding;

use super::catalog::{ArgumentDescriptor, PromptDescriptor};
use super::error::PromptError;
use super::registry::PromptEntry;
use super::templates::PromptTemplate;
use crate::core::config::CatalogProfile;

/// Trait for prompt definitions.
///
/// Each prompt must implement this trait to provide its metadata and templates.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// Template for the one-line summary returned with the messages.
    const SUMMARY: &'static str;

    /// Message templates, rendered in order.
    fn messages() -> Vec<&'static str>;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<ArgumentDescriptor>;

    fn descriptor() -> PromptDescriptor {
        PromptDescriptor {
            name: Self::NAME.to_string(),
            description: Self::DESCRIPTION.to_string(),
            arguments: Self::arguments(),
        }
    }
}

/// Parse a definition into a registry entry.
pub fn entry<P: PromptDefinition>() -> Result<PromptEntry, PromptError> {
    Ok(PromptEntry {
        descriptor: P::descriptor(),
        template: PromptTemplate::parse(P::SUMMARY, P::messages())?,
    })
}

/// Every prompt served by `profile`, in listing order.
pub fn catalog(profile: CatalogProfile) -> Result<Vec<PromptEntry>, PromptError> {
    match profile {
        CatalogProfile::Onboarding => onboarding::prompts(),
        CatalogProfile::Engineering => engineering::prompts(),
    }
}
