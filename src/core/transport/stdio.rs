//! MCP over stdin/stdout, one session per process.
//!
//! stdout carries protocol frames only; logging is routed to stderr.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

const TRANSPORT: &str = "STDIO";

pub struct StdioTransport;

impl StdioTransport {
    /// Serve `server` until the client closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let profile = server.config().catalog.profile;
        info!(
            "Ready - {} serving the '{}' catalog on stdin/stdout",
            server.name(),
            profile
        );

        let session = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::session(TRANSPORT, e))?;

        let reason = session
            .waiting()
            .await
            .map_err(|e| TransportError::serve(TRANSPORT, e))?;

        info!("STDIO session for '{}' ended: {:?}", profile, reason);
        Ok(())
    }
}
