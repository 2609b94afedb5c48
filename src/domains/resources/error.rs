//! Resource-specific error types.

use thiserror::Error;

/// Errors that can occur during resource operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The resource URI is invalid.
    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    /// Two manifest entries share the same id.
    #[error("Duplicate resource id in manifest: {0}")]
    DuplicateId(String),

    /// A manifest entry has no content in the store.
    #[error("No content registered for resource: {0}")]
    MissingContent(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    /// Create a new "invalid URI" error.
    pub fn invalid_uri(msg: impl Into<String>) -> Self {
        Self::InvalidUri(msg.into())
    }

    /// Create a new "duplicate id" error.
    pub fn duplicate_id(uri: impl Into<String>) -> Self {
        Self::DuplicateId(uri.into())
    }

    /// Create a new "missing content" error.
    pub fn missing_content(uri: impl Into<String>) -> Self {
        Self::MissingContent(uri.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error means the identifier has no registered entry.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
