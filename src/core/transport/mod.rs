//! Ways of exposing the documentation catalog to clients.
//!
//! Every transport ends in the same [`Dispatcher`](crate::domains::dispatch::Dispatcher):
//! stdio and TCP through rmcp's session machinery, HTTP through its own
//! JSON-RPC endpoint. Each is behind a cargo feature of the same name; only
//! `stdio` is enabled by default. [`TransportConfig::from_env`] picks one
//! at startup.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "stdio")]
pub mod stdio;
#[cfg(feature = "tcp")]
pub mod tcp;

pub use config::{DEFAULT_HTTP_PORT, DEFAULT_TCP_PORT, TransportConfig};
#[cfg(feature = "http")]
pub use config::HttpConfig;
#[cfg(feature = "tcp")]
pub use config::TcpConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
