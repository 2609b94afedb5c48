//! Dispatch error types and their protocol mapping.

use rmcp::{ErrorData as McpError, model::ErrorCode};
use serde_json::json;
use thiserror::Error;

use super::request::RequestError;
use crate::domains::{prompts::PromptError, resources::ResourceError};

/// Errors surfaced by [`super::Dispatcher`].
///
/// Messages pass through unchanged, so `Resource not found: {id}` and
/// `Prompt not found: {name}` reach the client verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Request(#[from] RequestError),
}

impl DispatchError {
    /// Whether the request named an identifier no registry knows.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Resource(e) => e.is_not_found(),
            Self::Prompt(e) => e.is_not_found(),
            Self::Request(_) => false,
        }
    }

    /// JSON-RPC error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Resource(ResourceError::NotFound(_)) => ErrorCode::RESOURCE_NOT_FOUND,
            Self::Resource(ResourceError::InvalidUri(_)) => ErrorCode::INVALID_PARAMS,
            Self::Prompt(PromptError::NotFound(_)) => ErrorCode::INVALID_PARAMS,
            Self::Request(RequestError::InvalidParams(_)) => ErrorCode::INVALID_PARAMS,
            Self::Request(RequestError::MethodNotFound(_)) => ErrorCode::METHOD_NOT_FOUND,
            _ => ErrorCode::INTERNAL_ERROR,
        }
    }
}

impl From<DispatchError> for McpError {
    fn from(err: DispatchError) -> Self {
        let data = match &err {
            DispatchError::Resource(ResourceError::NotFound(uri)) => Some(json!({ "uri": uri })),
            DispatchError::Prompt(PromptError::NotFound(name)) => Some(json!({ "name": name })),
            _ => None,
        };
        McpError::new(err.code(), err.to_string(), data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_not_found_mapping() {
        let err: McpError = DispatchError::from(ResourceError::not_found("docs://x")).into();
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
        assert_eq!(err.message, "Resource not found: docs://x");
        assert_eq!(err.data, Some(json!({ "uri": "docs://x" })));
    }

    #[test]
    fn test_prompt_not_found_mapping() {
        let err: McpError = DispatchError::from(PromptError::not_found("nope")).into();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.message, "Prompt not found: nope");
    }

    #[test]
    fn test_request_error_mapping() {
        let err = DispatchError::from(RequestError::method_not_found("tools/list"));
        assert_eq!(err.code(), ErrorCode::METHOD_NOT_FOUND);
        assert!(!err.is_not_found());

        let err = DispatchError::from(ResourceError::internal("boom"));
        assert_eq!(err.code(), ErrorCode::INTERNAL_ERROR);
    }
}
