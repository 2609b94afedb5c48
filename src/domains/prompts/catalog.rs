//! Prompt catalog types: descriptors and the argument bag.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Arguments supplied by a client, by name. Keys may be missing.
pub type PromptArguments = HashMap<String, String>;

/// One named argument a prompt accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDescriptor {
    pub name: String,
    pub description: String,
    /// Advertised to clients only. Rendering falls back when it is absent.
    pub required: bool,
}

impl ArgumentDescriptor {
    /// A required argument.
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: true,
        }
    }

    /// An optional argument.
    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: false,
        }
    }
}

/// Advertised metadata for one prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptDescriptor {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: String,

    /// The arguments this prompt accepts, in declaration order.
    pub arguments: Vec<ArgumentDescriptor>,
}

impl PromptDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_argument(mut self, argument: ArgumentDescriptor) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Whether `name` is a declared argument.
    pub fn declares(&self, name: &str) -> bool {
        self.arguments.iter().any(|a| a.name == name)
    }
}

/// Convert wire arguments into the string bag used for rendering.
///
/// Strings are kept verbatim, numbers and booleans use their JSON text,
/// anything else is treated as absent.
pub fn arguments_from_json(map: serde_json::Map<String, serde_json::Value>) -> PromptArguments {
    map.into_iter()
        .filter_map(|(k, v)| match v {
            serde_json::Value::String(s) => Some((k, s)),
            serde_json::Value::Number(n) => Some((k, n.to_string())),
            serde_json::Value::Bool(b) => Some((k, b.to_string())),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_declares() {
        let descriptor = PromptDescriptor::new("p", "d")
            .with_argument(ArgumentDescriptor::required("client_name", "Client"))
            .with_argument(ArgumentDescriptor::optional("tone", "Tone"));

        assert!(descriptor.declares("client_name"));
        assert!(descriptor.declares("tone"));
        assert!(!descriptor.declares("other"));
        assert!(descriptor.arguments[0].required);
        assert!(!descriptor.arguments[1].required);
    }

    #[test]
    fn test_arguments_from_json() {
        let map = json!({
            "client_name": "Acme",
            "seats": 12,
            "urgent": true,
            "nothing": null,
            "nested": { "a": 1 },
            "list": ["x"]
        });
        let serde_json::Value::Object(map) = map else {
            panic!("expected object");
        };

        let args = arguments_from_json(map);
        assert_eq!(args.len(), 3);
        assert_eq!(args["client_name"], "Acme");
        assert_eq!(args["seats"], "12");
        assert_eq!(args["urgent"], "true");
    }
}
