//! MCP over TCP: every accepted connection is an independent session.
//!
//! Sessions run on clones of the server, which share the same read-only
//! registries, so a slow or failing client never affects the others.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// Pause after a failed `accept`, so persistent errors do not spin.
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

pub struct TcpTransport {
    config: TcpConfig,
    sessions: Arc<AtomicUsize>,
}

impl TcpTransport {
    pub fn new(config: TcpConfig) -> Self {
        Self {
            config,
            sessions: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Number of sessions currently being served.
    pub fn active_sessions(&self) -> usize {
        self.sessions.load(Ordering::Relaxed)
    }

    /// Open the listening socket.
    pub async fn bind(&self) -> TransportResult<TcpListener> {
        let addr = self.address();
        TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(addr, e))
    }

    /// Bind, then accept connections forever.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let listener = self.bind().await?;
        info!(
            "Ready - {} serving the '{}' catalog on {} (JSON-RPC over TCP)",
            server.name(),
            server.config().catalog.profile,
            self.address()
        );
        self.serve(listener, server).await
    }

    async fn serve(&self, listener: TcpListener, server: McpServer) -> TransportResult<()> {
        loop {
            let (stream, peer) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                    continue;
                }
            };

            if let Err(e) = stream.set_nodelay(true) {
                warn!("Failed to set TCP_NODELAY for {}: {}", peer, e);
            }

            let active = self.sessions.fetch_add(1, Ordering::Relaxed) + 1;
            debug!("Accepted {} ({} active sessions)", peer, active);

            let sessions = Arc::clone(&self.sessions);
            let server = server.clone();
            tokio::spawn(async move {
                serve_session(server, stream, peer).await;
                sessions.fetch_sub(1, Ordering::Relaxed);
            });
        }
    }
}

async fn serve_session(server: McpServer, stream: TcpStream, peer: SocketAddr) {
    let session = match server.serve(stream).await {
        Ok(session) => session,
        Err(e) => {
            warn!("{}", TransportError::session("TCP", format!("{}: {}", peer, e)));
            return;
        }
    };
    info!("Client {} connected", peer);

    match session.waiting().await {
        Ok(reason) => info!("Client {} disconnected: {:?}", peer, reason),
        Err(e) => warn!("Session for {} aborted: {}", peer, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_and_initial_sessions() {
        let transport = TcpTransport::new(TcpConfig {
            port: 4000,
            host: "0.0.0.0".to_string(),
        });
        assert_eq!(transport.address(), "0.0.0.0:4000");
        assert_eq!(transport.active_sessions(), 0);
    }

    #[tokio::test]
    async fn test_bind_reports_occupied_address() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let transport = TcpTransport::new(TcpConfig {
            port,
            host: "127.0.0.1".to_string(),
        });
        let err = transport.bind().await.unwrap_err();

        assert!(matches!(err, TransportError::Bind { .. }));
        assert_eq!(err.address(), Some(format!("127.0.0.1:{}", port).as_str()));
    }
}
