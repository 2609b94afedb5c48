//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating every request to the [`Dispatcher`].
//!
//! ## Catalog Architecture
//!
//! Resources are defined in `domains/resources/definitions/` and prompts in
//! `domains/prompts/definitions/`, one file per item, grouped by profile.
//! The configured [`CatalogProfile`](super::config::CatalogProfile) picks
//! which set is compiled into the registries at startup.
//! **Adding a new document or prompt does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::{
    dispatch::Dispatcher,
    prompts::{self, PromptRegistry, arguments_from_json},
    resources::{self, ResourceRegistry},
};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. Clones are
/// cheap and share the same registries.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Router over the resource and prompt registries.
    dispatcher: Arc<Dispatcher>,
}

impl McpServer {
    /// Create a new MCP server serving the configured catalog profile.
    ///
    /// Fails if the compiled-in catalog is inconsistent (duplicate ids,
    /// malformed templates, undeclared arguments).
    pub fn new(config: Config) -> Result<Self> {
        let profile = config.catalog.profile;

        let prompts = PromptRegistry::new(prompts::definitions::catalog(profile)?)?;
        let resources = ResourceRegistry::from_entries(resources::catalog(
            profile,
            &config.server,
            prompts.len(),
        ))?;

        info!(
            "Catalog '{}' loaded: {} resources, {} prompts",
            profile,
            resources.len(),
            prompts.len()
        );

        Ok(Self::with_dispatcher(
            config,
            Dispatcher::new(Arc::new(resources), Arc::new(prompts)),
        ))
    }

    /// Create a server around an already built dispatcher.
    pub fn with_dispatcher(config: Config, dispatcher: Dispatcher) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server instructions.
    pub fn instructions(&self) -> &str {
        &self.config.server.instructions
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// The request router shared by all transports.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(self.config.server.instructions.clone()),
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        Ok(self.dispatcher.list_resources())
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.dispatcher
            .read_resource(&request.uri)
            .map_err(McpError::from)
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        Ok(self.dispatcher.list_prompts())
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        let arguments = request.arguments.map(arguments_from_json).unwrap_or_default();
        self.dispatcher
            .get_prompt(&request.name, &arguments)
            .map_err(McpError::from)
    }
}
