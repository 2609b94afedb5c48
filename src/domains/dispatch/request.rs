//! Typed requests accepted by the dispatcher.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::domains::prompts::{PromptArguments, arguments_from_json};

/// Errors raised while turning a protocol message into a [`Request`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The method is not one the dispatcher serves.
    #[error("Method not found: {0}")]
    MethodNotFound(String),

    /// The params are missing or have the wrong shape.
    #[error("Invalid params: {0}")]
    InvalidParams(String),
}

impl RequestError {
    pub fn method_not_found(method: impl Into<String>) -> Self {
        Self::MethodNotFound(method.into())
    }

    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::InvalidParams(msg.into())
    }
}

/// The four request kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    ListResources,
    ReadResource { id: String },
    ListPrompts,
    GetPrompt {
        name: String,
        arguments: PromptArguments,
    },
}

#[derive(Deserialize)]
struct ReadResourceParams {
    uri: String,
}

#[derive(Deserialize)]
struct GetPromptParams {
    name: String,
    #[serde(default)]
    arguments: Option<serde_json::Map<String, Value>>,
}

impl Request {
    pub const LIST_RESOURCES: &'static str = "resources/list";
    pub const READ_RESOURCE: &'static str = "resources/read";
    pub const LIST_PROMPTS: &'static str = "prompts/list";
    pub const GET_PROMPT: &'static str = "prompts/get";

    /// The MCP method name for this request.
    pub fn method(&self) -> &'static str {
        match self {
            Self::ListResources => Self::LIST_RESOURCES,
            Self::ReadResource { .. } => Self::READ_RESOURCE,
            Self::ListPrompts => Self::LIST_PROMPTS,
            Self::GetPrompt { .. } => Self::GET_PROMPT,
        }
    }

    /// Parse a JSON-RPC method and its params.
    ///
    /// Params of the list methods are ignored; pagination is not supported.
    pub fn from_method(method: &str, params: Option<Value>) -> Result<Self, RequestError> {
        match method {
            Self::LIST_RESOURCES => Ok(Self::ListResources),
            Self::LIST_PROMPTS => Ok(Self::ListPrompts),
            Self::READ_RESOURCE => {
                let params: ReadResourceParams = parse_params(params, "resource URI")?;
                Ok(Self::ReadResource { id: params.uri })
            }
            Self::GET_PROMPT => {
                let params: GetPromptParams = parse_params(params, "prompt name")?;
                Ok(Self::GetPrompt {
                    name: params.name,
                    arguments: params.arguments.map(arguments_from_json).unwrap_or_default(),
                })
            }
            other => Err(RequestError::method_not_found(other)),
        }
    }
}

fn parse_params<T: for<'de> Deserialize<'de>>(
    params: Option<Value>,
    what: &str,
) -> Result<T, RequestError> {
    let params = params.ok_or_else(|| RequestError::invalid_params("Missing params"))?;
    serde_json::from_value(params)
        .map_err(|e| RequestError::invalid_params(format!("Missing or invalid {}: {}", what, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_methods() {
        assert_eq!(
            Request::from_method("resources/list", None).unwrap(),
            Request::ListResources
        );
        assert_eq!(
            Request::from_method("prompts/list", Some(json!({ "cursor": "x" }))).unwrap(),
            Request::ListPrompts
        );
    }

    #[test]
    fn test_read_resource() {
        let request = Request::from_method(
            "resources/read",
            Some(json!({ "uri": "docs://onboarding/checklist" })),
        )
        .unwrap();
        assert_eq!(
            request,
            Request::ReadResource {
                id: "docs://onboarding/checklist".to_string()
            }
        );
        assert_eq!(request.method(), "resources/read");
    }

    #[test]
    fn test_get_prompt_with_arguments() {
        let request = Request::from_method(
            "prompts/get",
            Some(json!({ "name": "onboard_client", "arguments": { "client_name": "Acme" } })),
        )
        .unwrap();

        let Request::GetPrompt { name, arguments } = request else {
            panic!("expected GetPrompt");
        };
        assert_eq!(name, "onboard_client");
        assert_eq!(arguments.get("client_name").map(String::as_str), Some("Acme"));
    }

    #[test]
    fn test_get_prompt_without_arguments() {
        let request =
            Request::from_method("prompts/get", Some(json!({ "name": "onboard_client" }))).unwrap();
        assert!(matches!(request, Request::GetPrompt { arguments, .. } if arguments.is_empty()));
    }

    #[test]
    fn test_missing_params() {
        assert_eq!(
            Request::from_method("resources/read", None).unwrap_err(),
            RequestError::InvalidParams("Missing params".to_string())
        );
        assert!(matches!(
            Request::from_method("resources/read", Some(json!({ "url": "x" }))),
            Err(RequestError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_unknown_method() {
        assert_eq!(
            Request::from_method("tools/call", None).unwrap_err(),
            RequestError::MethodNotFound("tools/call".to_string())
        );
    }
}
