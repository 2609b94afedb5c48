//! Transport selection and its environment variables.
//!
//! | Variable | Used by | Default |
//! |---|---|---|
//! | `MCP_TRANSPORT` | all | first enabled of `stdio`, `tcp`, `http` |
//! | `MCP_TCP_PORT`, `MCP_TCP_HOST` | tcp | `3000`, `127.0.0.1` |
//! | `MCP_HTTP_PORT`, `MCP_HTTP_HOST` | http | `8080`, `127.0.0.1` |
//! | `MCP_HTTP_PATH` | http | `/mcp` |
//! | `MCP_HTTP_CORS` | http | `true` |
//!
//! A value that does not validate is logged and replaced by its default,
//! so a typo never stops the server from starting.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Port used by the TCP transport when none is configured.
pub const DEFAULT_TCP_PORT: u16 = 3000;

/// Port used by the HTTP transport when none is configured.
pub const DEFAULT_HTTP_PORT: u16 = 8080;

#[cfg(any(feature = "tcp", feature = "http"))]
const DEFAULT_HOST: &str = "127.0.0.1";

#[cfg(feature = "http")]
const DEFAULT_RPC_PATH: &str = "/mcp";

/// Routes the HTTP router serves itself.
#[cfg(feature = "http")]
const RESERVED_PATHS: [&str; 2] = ["/", "/health"];

/// The transport a server process listens on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// MCP over stdin/stdout.
    #[cfg(feature = "stdio")]
    Stdio,

    /// One MCP session per TCP connection.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// JSON-RPC over HTTP POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

#[cfg(feature = "tcp")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcpConfig {
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

#[cfg(feature = "http")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    /// Path of the JSON-RPC endpoint. Never `/` or `/health`.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Allow any origin, for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    DEFAULT_RPC_PATH.to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            return Self::Stdio;
        }

        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        {
            return Self::Tcp(TcpConfig::default());
        }

        #[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio, tcp, or http");
        }
    }
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_TCP_PORT,
            host: default_host(),
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_HTTP_PORT,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

impl TransportConfig {
    /// Load the transport from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the transport from `var`, a variable lookup.
    ///
    /// An unknown or disabled `MCP_TRANSPORT` selects the default transport.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let name = var("MCP_TRANSPORT")
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        match name.as_str() {
            "" => Self::default(),
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio,
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig {
                port: port_var(&var, "MCP_TCP_PORT", DEFAULT_TCP_PORT),
                host: host_var(&var, "MCP_TCP_HOST"),
            }),
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig {
                port: port_var(&var, "MCP_HTTP_PORT", DEFAULT_HTTP_PORT),
                host: host_var(&var, "MCP_HTTP_HOST"),
                rpc_path: rpc_path_var(&var),
                enable_cors: flag_var(&var, "MCP_HTTP_CORS", default_cors()),
            }),
            other => {
                let fallback = Self::default();
                warn!(
                    "MCP_TRANSPORT '{}' is unknown or not compiled in; using {}",
                    other,
                    fallback.description()
                );
                fallback
            }
        }
    }

    /// Human readable summary for startup logs.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("TCP on {}:{}", cfg.host, cfg.port),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }
}

/// A listening port. Zero is rejected: clients need a port they can know.
#[cfg(any(feature = "tcp", feature = "http"))]
fn parse_port(value: &str) -> Option<u16> {
    value.trim().parse::<u16>().ok().filter(|port| *port != 0)
}

/// Check an RPC endpoint path against what the router can mount.
#[cfg(feature = "http")]
fn validate_rpc_path(path: &str) -> Result<(), &'static str> {
    if !path.starts_with('/') {
        return Err("must start with '/'");
    }
    if path
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '{' | '}' | '*'))
    {
        return Err("must be a literal path");
    }
    if RESERVED_PATHS.contains(&path) {
        return Err("is already served by the router");
    }
    Ok(())
}

#[cfg(feature = "http")]
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn port_var(var: &impl Fn(&str) -> Option<String>, key: &str, default: u16) -> u16 {
    let Some(value) = var(key) else {
        return default;
    };
    parse_port(&value).unwrap_or_else(|| {
        warn!("Invalid {} '{}'; falling back to {}", key, value, default);
        default
    })
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn host_var(var: &impl Fn(&str) -> Option<String>, key: &str) -> String {
    var(key)
        .map(|host| host.trim().to_string())
        .filter(|host| !host.is_empty())
        .unwrap_or_else(default_host)
}

#[cfg(feature = "http")]
fn rpc_path_var(var: &impl Fn(&str) -> Option<String>) -> String {
    let Some(path) = var("MCP_HTTP_PATH") else {
        return default_rpc_path();
    };
    let path = path.trim().to_string();
    match validate_rpc_path(&path) {
        Ok(()) => path,
        Err(reason) => {
            warn!(
                "MCP_HTTP_PATH '{}' {}; falling back to '{}'",
                path, reason, DEFAULT_RPC_PATH
            );
            default_rpc_path()
        }
    }
}

#[cfg(feature = "http")]
fn flag_var(var: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    let Some(value) = var(key) else {
        return default;
    };
    parse_flag(&value).unwrap_or_else(|| {
        warn!("Invalid {} '{}'; falling back to {}", key, value, default);
        default
    })
}
