//! Documentation MCP Server Library
//!
//! This crate serves a fixed catalog of documents and prompt templates over
//! the Model Context Protocol. Clients list and read documents as resources
//! and render prompts with their own arguments.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **resources**: the document manifest, content store and registry
//!   - **prompts**: the prompt catalog, templates and rendering
//!   - **dispatch**: request routing and response envelopes
//!
//! # Example
//!
//! ```rust,no_run
//! use docs_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
