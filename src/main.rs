//! Documentation MCP Server Entry Point
//!
//! Initializes logging, loads configuration, builds the catalog for the
//! configured profile and starts the server with the configured transport.

use anyhow::{Context, Result};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use docs_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    init_logging(&config.logging.level, config.logging.with_timestamps);

    info!(
        "Starting {} v{} (profile: {})",
        config.server.name, config.server.version, config.catalog.profile
    );

    let server = McpServer::new(config).context("failed to build documentation catalog")?;

    info!("Server initialized");

    TransportService::new(server).run().await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs always go to stderr; stdout is reserved for the STDIO transport.
fn init_logging(level: &str, with_timestamps: bool) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
