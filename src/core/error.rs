//! Error types and handling for the documentation server.
//!
//! Everything that can stop the server from starting: an inconsistent
//! compiled-in catalog, a bad configuration value, or a transport failure.
//! Per-request failures are `DispatchError`s and never reach this type.

use thiserror::Error;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the documentation server.
///
/// Catalog errors surface while the registries are built; transport errors
/// while binding or serving.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the resources domain.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),

    /// Error originating from the prompts domain.
    #[error("Prompt error: {0}")]
    Prompt(#[from] crate::domains::prompts::PromptError),

    /// Error from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
