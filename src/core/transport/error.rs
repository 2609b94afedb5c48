//! Transport error types.

use std::fmt::Display;

use thiserror::Error;

pub type TransportResult<T> = Result<T, TransportError>;

/// Why a transport stopped serving the catalog.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The listening socket could not be opened.
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The MCP handshake over `transport` failed.
    #[error("Failed to start MCP session over {transport}: {message}")]
    Session {
        transport: &'static str,
        message: String,
    },

    /// `transport` stopped after the session or server had started.
    #[error("{transport} transport stopped: {message}")]
    Serve {
        transport: &'static str,
        message: String,
    },
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    pub fn session(transport: &'static str, err: impl Display) -> Self {
        Self::Session {
            transport,
            message: err.to_string(),
        }
    }

    pub fn serve(transport: &'static str, err: impl Display) -> Self {
        Self::Serve {
            transport,
            message: err.to_string(),
        }
    }

    /// The address that could not be bound, for bind failures.
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::Bind { address, .. } => Some(address),
            _ => None,
        }
    }
}
