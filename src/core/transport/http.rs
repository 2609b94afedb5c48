//! HTTP transport implementation.
//!
//! HTTP server with JSON-RPC over POST requests.
//! This allows standard HTTP clients (curl, browsers, etc.) to read the
//! documentation catalog without an MCP client library.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rmcp::ErrorData as McpError;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::domains::dispatch::{DispatchError, Request};

/// Protocol version announced when the client does not request one.
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    pub fn new(id: impl Into<Value>, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: Some(id.into()),
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl From<McpError> for JsonRpcError {
    fn from(err: McpError) -> Self {
        Self {
            code: err.code.0,
            message: err.message.into_owned(),
            data: err.data,
        }
    }
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self::failure(
            id,
            JsonRpcError {
                code,
                message: message.into(),
                data: None,
            },
        )
    }

    fn failure(id: Option<Value>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }

    /// Error response for a failed dispatch.
    pub fn dispatch_error(id: Option<Value>, err: DispatchError) -> Self {
        Self::failure(id, McpError::from(err).into())
    }

    /// Invalid request error.
    pub fn invalid_request(id: Option<Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    /// Internal error.
    pub fn internal_error(id: Option<Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32603, msg)
    }
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The MCP server instance.
    server: McpServer,
    /// Protocol version negotiated by the last `initialize`.
    session: Arc<RwLock<Option<SessionState>>>,
}

#[derive(Debug, Clone)]
struct SessionState {
    initialized: bool,
    protocol_version: String,
}

impl AppState {
    pub fn new(server: McpServer) -> Self {
        Self {
            server,
            session: Arc::new(RwLock::new(None)),
        }
    }

    /// The protocol version agreed during `initialize`, if any.
    pub async fn protocol_version(&self) -> Option<String> {
        self.session
            .read()
            .await
            .as_ref()
            .map(|s| s.protocol_version.clone())
    }

    /// Whether the client confirmed initialization.
    pub async fn is_initialized(&self) -> bool {
        self.session
            .read()
            .await
            .as_ref()
            .is_some_and(|s| s.initialized)
    }
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the axum router for `state`.
    pub fn router(&self, state: AppState) -> Router {
        let app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app.layer(cors)
        } else {
            app
        }
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let server_name = server.name().to_string();
        let profile = server.config().catalog.profile;
        let app = self.router(AppState::new(server));

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "Ready - {} serving the '{}' catalog at http://{}{} (CORS {})",
            server_name,
            profile,
            addr,
            self.config.rpc_path,
            if self.config.enable_cors { "on" } else { "off" }
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::serve("HTTP", e))?;

        Ok(())
    }
}

/// Root handler - describes the server and its catalog.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    let config = state.server.config();
    Json(json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "profile": config.catalog.profile,
        "transport": "HTTP",
        "resources": state.server.dispatcher().resources().len(),
        "prompts": state.server.dispatcher().prompts().len(),
        "protocol": "JSON-RPC 2.0",
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle JSON-RPC requests.
///
/// Notifications get `202 Accepted` and no body.
#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> Response {
    tracing::Span::current().record("method", &request.method);
    info!("Received JSON-RPC request: {}", request.method);

    match process_request(&state, request).await {
        Some(response) => (StatusCode::OK, Json(response)).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// Process a JSON-RPC request and return the response, if one is owed.
///
/// Session methods are answered here; everything else goes through the
/// server's dispatcher. Notifications yield `None`.
pub async fn process_request(
    state: &AppState,
    request: JsonRpcRequest,
) -> Option<JsonRpcResponse> {
    if request.jsonrpc != "2.0" {
        return Some(JsonRpcResponse::invalid_request(request.id));
    }

    let response = match request.method.as_str() {
        "initialize" => handle_initialize(state, request).await,
        "ping" => JsonRpcResponse::success(request.id, json!({})),
        method if method.starts_with("notifications/") => {
            handle_notification(state, &request).await;
            return None;
        }
        _ => handle_dispatch(state, request),
    };
    Some(response)
}

fn handle_dispatch(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let JsonRpcRequest {
        id, method, params, ..
    } = request;

    let parsed = match Request::from_method(&method, params) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Rejected {}: {}", method, e);
            return JsonRpcResponse::dispatch_error(id, e.into());
        }
    };

    match state.server.dispatcher().dispatch(parsed) {
        Ok(response) => match response.to_json() {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(e) => JsonRpcResponse::internal_error(id, e.to_string()),
        },
        Err(e) => JsonRpcResponse::dispatch_error(id, e),
    }
}

/// Handle initialize request.
async fn handle_initialize(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let protocol_version = request
        .params
        .as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_PROTOCOL_VERSION)
        .to_string();
    info!("Processing initialize request ({})", protocol_version);

    *state.session.write().await = Some(SessionState {
        initialized: false,
        protocol_version: protocol_version.clone(),
    });

    let result = json!({
        "protocolVersion": protocol_version,
        "capabilities": {
            "resources": {},
            "prompts": {}
        },
        "serverInfo": {
            "name": state.server.name(),
            "version": state.server.version()
        },
        "instructions": state.server.instructions()
    });

    JsonRpcResponse::success(request.id, result)
}

/// Handle notifications (no response needed).
async fn handle_notification(state: &AppState, request: &JsonRpcRequest) {
    match request.method.as_str() {
        "notifications/initialized" => {
            info!("Client sent initialized notification");
            if let Some(session) = state.session.write().await.as_mut() {
                session.initialized = true;
            }
        }
        _ => {
            debug!("Received notification: {}", request.method);
        }
    }
}
