//! Request router over the resource and prompt registries.

use std::sync::Arc;

use rmcp::model::{GetPromptResult, ListPromptsResult, ListResourcesResult, ReadResourceResult};
use tracing::{debug, warn};

use super::error::DispatchError;
use super::request::Request;
use super::response::{
    Response, build_prompt_list, build_prompt_response, build_resource_list,
    build_resource_response,
};
use crate::domains::prompts::{PromptArguments, PromptRegistry};
use crate::domains::resources::ResourceRegistry;

/// Routes each [`Request`] to its registry and wraps the result.
///
/// Holds no mutable state; clones share the same registries.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    resources: Arc<ResourceRegistry>,
    prompts: Arc<PromptRegistry>,
}

impl Dispatcher {
    pub fn new(resources: Arc<ResourceRegistry>, prompts: Arc<PromptRegistry>) -> Self {
        Self { resources, prompts }
    }

    pub fn resources(&self) -> &ResourceRegistry {
        &self.resources
    }

    pub fn prompts(&self) -> &PromptRegistry {
        &self.prompts
    }

    /// Handle one request to completion.
    pub fn dispatch(&self, request: Request) -> Result<Response, DispatchError> {
        let method = request.method();
        debug!("Dispatching {}", method);

        let result = match request {
            Request::ListResources => Ok(Response::ResourceList(self.list_resources())),
            Request::ReadResource { id } => self.read_resource(&id).map(Response::ResourceContents),
            Request::ListPrompts => Ok(Response::PromptList(self.list_prompts())),
            Request::GetPrompt { name, arguments } => {
                self.get_prompt(&name, &arguments).map(Response::Prompt)
            }
        };

        if let Err(e) = &result {
            warn!("{} failed: {}", method, e);
        }
        result
    }

    pub fn list_resources(&self) -> ListResourcesResult {
        build_resource_list(self.resources.list_resources())
    }

    pub fn read_resource(&self, id: &str) -> Result<ReadResourceResult, DispatchError> {
        let resolved = self.resources.get_resource(id)?;
        Ok(build_resource_response(
            resolved.descriptor,
            resolved.text.into_owned(),
        ))
    }

    pub fn list_prompts(&self) -> ListPromptsResult {
        build_prompt_list(self.prompts.list_prompts())
    }

    pub fn get_prompt(
        &self,
        name: &str,
        arguments: &PromptArguments,
    ) -> Result<GetPromptResult, DispatchError> {
        let rendered = self.prompts.render_prompt(name, arguments)?;
        Ok(build_prompt_response(rendered.summary, rendered.messages))
    }
}
