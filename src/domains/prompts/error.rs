//! Prompt-specific error types.

use thiserror::Error;

/// Errors that can occur during prompt operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    /// The requested prompt was not found.
    #[error("Prompt not found: {0}")]
    NotFound(String),

    /// Two catalog entries share the same name.
    #[error("Duplicate prompt name in catalog: {0}")]
    DuplicateName(String),

    /// A template substitutes an argument its descriptor does not declare.
    #[error("Prompt '{prompt}' references undeclared argument '{argument}'")]
    UndeclaredArgument { prompt: String, argument: String },

    /// Template parsing failed.
    #[error("Template error: {0}")]
    TemplateError(String),
}

impl PromptError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "duplicate name" error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    /// Create a new "undeclared argument" error.
    pub fn undeclared_argument(prompt: impl Into<String>, argument: impl Into<String>) -> Self {
        Self::UndeclaredArgument {
            prompt: prompt.into(),
            argument: argument.into(),
        }
    }

    /// Create a new "template" error.
    pub fn template(msg: impl Into<String>) -> Self {
        Self::TemplateError(msg.into())
    }

    /// Whether this error means the name has no registered prompt.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
