//! Configuration management for the documentation server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

/// Main configuration structure for the documentation server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Which documentation catalog this process serves.
    pub catalog: CatalogConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,

    /// Usage instructions advertised during initialization.
    pub instructions: String,
}

/// Configuration for the served catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// The catalog profile (set of resources and prompts) to serve.
    pub profile: CatalogProfile,
}

/// A named set of resources and prompts compiled into the binary.
///
/// Each profile corresponds to one documentation server; they share the
/// registry and dispatch machinery and differ only in their catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogProfile {
    /// Client onboarding documentation.
    #[default]
    Onboarding,

    /// Engineering handbook.
    Engineering,
}

impl CatalogProfile {
    /// All known profiles, in declaration order.
    pub const ALL: [CatalogProfile; 2] = [CatalogProfile::Onboarding, CatalogProfile::Engineering];

    /// The canonical lowercase name of the profile.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Onboarding => "onboarding",
            Self::Engineering => "engineering",
        }
    }
}

impl fmt::Display for CatalogProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogProfile {
    type Err = super::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "onboarding" => Ok(Self::Onboarding),
            "engineering" => Ok(Self::Engineering),
            other => Err(super::Error::config(format!(
                "unknown catalog profile '{}'",
                other
            ))),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "docs-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                instructions: "This server exposes read-only documentation as resources and \
                               reusable prompt templates. List resources to browse the docs, \
                               then read them by URI."
                    .to_string(),
            },
            catalog: CatalogConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_DOCS_PROFILE`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(instructions) = std::env::var("MCP_SERVER_INSTRUCTIONS") {
            config.server.instructions = instructions;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.parse().unwrap_or(true);
        }

        if let Ok(profile) = std::env::var("MCP_DOCS_PROFILE") {
            match profile.parse::<CatalogProfile>() {
                Ok(profile) => {
                    config.catalog.profile = profile;
                    info!("Catalog profile set to {}", profile);
                }
                Err(e) => {
                    warn!(
                        "{}; falling back to '{}'",
                        e,
                        CatalogProfile::default()
                    );
                }
            }
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_profile_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_DOCS_PROFILE", "Engineering");
        }
        let config = Config::from_env();
        assert_eq!(config.catalog.profile, CatalogProfile::Engineering);
        unsafe {
            std::env::remove_var("MCP_DOCS_PROFILE");
        }
    }

    #[test]
    fn test_unknown_profile_falls_back_to_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_DOCS_PROFILE", "marketing");
        }
        let config = Config::from_env();
        assert_eq!(config.catalog.profile, CatalogProfile::Onboarding);
        unsafe {
            std::env::remove_var("MCP_DOCS_PROFILE");
        }
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "handbook");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "handbook");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }

    #[test]
    fn test_profile_parsing() {
        assert_eq!(
            "onboarding".parse::<CatalogProfile>().unwrap(),
            CatalogProfile::Onboarding
        );
        assert_eq!(
            " ENGINEERING ".parse::<CatalogProfile>().unwrap(),
            CatalogProfile::Engineering
        );
        assert!("".parse::<CatalogProfile>().is_err());
    }

    #[test]
    fn test_profile_display_round_trips() {
        for profile in CatalogProfile::ALL {
            assert_eq!(profile.to_string().parse::<CatalogProfile>().unwrap(), profile);
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.catalog.profile, CatalogProfile::Onboarding);
        assert_eq!(config.logging.level, "info");
        assert!(!config.server.instructions.is_empty());
    }
}
