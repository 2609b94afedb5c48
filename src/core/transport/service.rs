//! Runs a built server on the transport its configuration names.

use tracing::info;

use super::{TransportConfig, TransportResult};
use crate::core::McpServer;

#[cfg(feature = "http")]
use super::http::HttpTransport;
#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;
#[cfg(feature = "tcp")]
use super::tcp::TcpTransport;

pub struct TransportService {
    server: McpServer,
}

impl TransportService {
    pub fn new(server: McpServer) -> Self {
        Self { server }
    }

    /// The transport `run` will start.
    pub fn transport(&self) -> &TransportConfig {
        &self.server.config().transport
    }

    /// Serve until the transport shuts down.
    pub async fn run(self) -> TransportResult<()> {
        let transport = self.transport().clone();
        info!(
            "Serving '{}' catalog via {}",
            self.server.config().catalog.profile,
            transport.description()
        );

        match transport {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run(self.server).await,
            #[cfg(feature = "tcp")]
            TransportConfig::Tcp(cfg) => TcpTransport::new(cfg).run(self.server).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => HttpTransport::new(cfg).run(self.server).await,
        }
    }
}
