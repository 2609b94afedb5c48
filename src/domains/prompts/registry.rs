//! Prompt registry.
//!
//! Holds the catalog of prompt descriptors alongside the template that
//! renders each one. Built once at startup and read-only afterwards.

use std::collections::HashMap;
use tracing::{debug, info};

use super::catalog::{PromptArguments, PromptDescriptor};
use super::error::PromptError;
use super::templates::{PromptTemplate, RenderedPrompt};

/// A descriptor together with its template.
#[derive(Debug, Clone)]
pub struct PromptEntry {
    pub descriptor: PromptDescriptor,
    pub template: PromptTemplate,
}

/// Immutable catalog of renderable prompts.
#[derive(Debug, Clone)]
pub struct PromptRegistry {
    /// Descriptors in declaration order.
    catalog: Vec<PromptDescriptor>,

    /// Key: prompt name, Value: template
    templates: HashMap<String, PromptTemplate>,
}

impl PromptRegistry {
    /// Build a registry, rejecting duplicate names and templates that
    /// substitute arguments their descriptor does not declare.
    pub fn new(entries: impl IntoIterator<Item = PromptEntry>) -> Result<Self, PromptError> {
        let mut catalog = Vec::new();
        let mut templates = HashMap::new();

        for PromptEntry {
            descriptor,
            template,
        } in entries
        {
            if templates.contains_key(&descriptor.name) {
                return Err(PromptError::duplicate_name(&descriptor.name));
            }
            if let Some(undeclared) = template
                .referenced_arguments()
                .into_iter()
                .find(|name| !descriptor.declares(name))
            {
                return Err(PromptError::undeclared_argument(&descriptor.name, undeclared));
            }

            info!("Registering prompt: {}", descriptor.name);
            templates.insert(descriptor.name.clone(), template);
            catalog.push(descriptor);
        }

        info!("Registered {} prompts", catalog.len());
        Ok(Self { catalog, templates })
    }

    /// The catalog as declared.
    pub fn list_prompts(&self) -> &[PromptDescriptor] {
        &self.catalog
    }

    /// Render prompt `name`.
    ///
    /// Arguments marked required are not enforced: a missing or empty value
    /// renders the placeholder's fallback text instead.
    pub fn render_prompt(
        &self,
        name: &str,
        arguments: &PromptArguments,
    ) -> Result<RenderedPrompt, PromptError> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let rendered = template.render(arguments);
        debug!(
            "Rendered prompt {} into {} message(s)",
            name,
            rendered.messages.len()
        );
        Ok(rendered)
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}
