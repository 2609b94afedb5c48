//! Response builder.
//!
//! Pure, total functions wrapping registry output in the MCP envelope types.

use rmcp::model::{
    AnnotateAble, GetPromptResult, JsonObject, ListPromptsResult, ListResourcesResult, Meta,
    Prompt, PromptArgument, PromptMessage, PromptMessageRole, RawResource, ReadResourceResult,
    Resource, ResourceContents,
};
use serde_json::Value;

use crate::domains::prompts::{MessageFragment, PromptDescriptor, Role};
use crate::domains::resources::ResourceDescriptor;

/// A successful dispatch result.
#[derive(Debug, Clone)]
pub enum Response {
    ResourceList(ListResourcesResult),
    ResourceContents(ReadResourceResult),
    PromptList(ListPromptsResult),
    Prompt(GetPromptResult),
}

impl Response {
    /// Serialize the envelope as a JSON-RPC `result` value.
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::ResourceList(result) => serde_json::to_value(result),
            Self::ResourceContents(result) => serde_json::to_value(result),
            Self::PromptList(result) => serde_json::to_value(result),
            Self::Prompt(result) => serde_json::to_value(result),
        }
    }
}

fn resource(descriptor: &ResourceDescriptor) -> Resource {
    let mut raw = RawResource::new(&descriptor.id, descriptor.slug());
    raw.title = Some(descriptor.display_name.clone());
    if !descriptor.description.is_empty() {
        raw.description = Some(descriptor.description.clone());
    }
    raw.mime_type = Some(descriptor.content_type.clone());
    if !descriptor.category.is_empty() {
        let mut meta = JsonObject::new();
        meta.insert("category".to_string(), Value::from(descriptor.category.as_str()));
        raw.meta = Some(Meta(meta));
    }
    raw.no_annotation()
}

fn prompt(descriptor: &PromptDescriptor) -> Prompt {
    Prompt {
        name: descriptor.name.clone(),
        title: None,
        description: Some(descriptor.description.clone()),
        arguments: Some(
            descriptor
                .arguments
                .iter()
                .map(|a| PromptArgument {
                    name: a.name.clone(),
                    title: None,
                    description: Some(a.description.clone()),
                    required: Some(a.required),
                })
                .collect(),
        ),
        icons: None,
        meta: None,
    }
}

fn message(fragment: MessageFragment) -> PromptMessage {
    let role = match fragment.role {
        Role::User => PromptMessageRole::User,
    };
    PromptMessage::new_text(role, fragment.text)
}

/// `{ resources: [...] }`, in manifest order.
pub fn build_resource_list(descriptors: &[ResourceDescriptor]) -> ListResourcesResult {
    ListResourcesResult {
        resources: descriptors.iter().map(resource).collect(),
        next_cursor: None,
        meta: None,
    }
}

/// `{ contents: [{ uri, mimeType, text }] }` for one resource.
pub fn build_resource_response(
    descriptor: &ResourceDescriptor,
    text: impl Into<String>,
) -> ReadResourceResult {
    ReadResourceResult {
        contents: vec![ResourceContents::TextResourceContents {
            uri: descriptor.id.clone(),
            mime_type: Some(descriptor.content_type.clone()),
            text: text.into(),
            meta: None,
        }],
    }
}

/// `{ prompts: [...] }`, in catalog order.
pub fn build_prompt_list(descriptors: &[PromptDescriptor]) -> ListPromptsResult {
    ListPromptsResult {
        prompts: descriptors.iter().map(prompt).collect(),
        next_cursor: None,
        meta: None,
    }
}

/// `{ description: summary, messages: [...] }`.
pub fn build_prompt_response(
    summary: impl Into<String>,
    messages: Vec<MessageFragment>,
) -> GetPromptResult {
    GetPromptResult {
        description: Some(summary.into()),
        messages: messages.into_iter().map(message).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::prompts::ArgumentDescriptor;
    use serde_json::json;

    fn checklist() -> ResourceDescriptor {
        ResourceDescriptor::new("docs://onboarding/checklist", "text/plain", "Checklist")
            .with_description("Steps")
            .with_category("onboarding")
    }

    #[test]
    fn test_build_resource_list() {
        let result = build_resource_list(&[checklist()]);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["resources"][0]["uri"], "docs://onboarding/checklist");
        assert_eq!(json["resources"][0]["name"], "checklist");
        assert_eq!(json["resources"][0]["title"], "Checklist");
        assert_eq!(json["resources"][0]["_meta"]["category"], "onboarding");
        assert_eq!(json["resources"][0]["mimeType"], "text/plain");
        assert_eq!(json["resources"][0]["description"], "Steps");
    }

    #[test]
    fn test_uncategorized_resource_has_no_meta() {
        let descriptor = ResourceDescriptor::new("docs://loose", "text/plain", "Loose");
        let json = serde_json::to_value(build_resource_list(&[descriptor])).unwrap();

        assert_eq!(json["resources"][0]["name"], "loose");
        assert!(json["resources"][0].get("_meta").is_none());
        assert!(json["resources"][0].get("description").is_none());
    }

    #[test]
    fn test_build_resource_response() {
        let result = build_resource_response(&checklist(), "# Checklist\n...");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(
            json["contents"],
            json!([{
                "uri": "docs://onboarding/checklist",
                "mimeType": "text/plain",
                "text": "# Checklist\n..."
            }])
        );
    }

    #[test]
    fn test_build_prompt_list() {
        let descriptor = PromptDescriptor::new("onboard_client", "Onboard")
            .with_argument(ArgumentDescriptor::required("client_name", "Client"));
        let json = serde_json::to_value(build_prompt_list(&[descriptor])).unwrap();

        assert_eq!(json["prompts"][0]["name"], "onboard_client");
        assert_eq!(json["prompts"][0]["arguments"][0]["name"], "client_name");
        assert_eq!(json["prompts"][0]["arguments"][0]["required"], true);
    }

    #[test]
    fn test_build_prompt_response() {
        let result = build_prompt_response("Summary", vec![MessageFragment::user("Hello")]);
        assert_eq!(result.description.as_deref(), Some("Summary"));
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].role, PromptMessageRole::User);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"]["text"], "Hello");
    }
}
