//! JSON-RPC over HTTP, driven through the router without binding a socket.

#![cfg(feature = "http")]

use axum::body::Body;
use bytes::Bytes;
use docs_mcp_server::core::transport::HttpConfig;
use docs_mcp_server::core::transport::http::{
    AppState, HttpTransport, JsonRpcRequest, process_request,
};
use docs_mcp_server::core::{Config, McpServer};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn state() -> AppState {
    AppState::new(McpServer::new(Config::default()).unwrap())
}

async fn call(method: &str, params: Option<Value>) -> Value {
    let response = process_request(&state(), JsonRpcRequest::new(1, method, params))
        .await
        .unwrap();
    serde_json::to_value(response).unwrap()
}

#[tokio::test]
async fn initialize_negotiates_session() {
    let state = state();

    let response = process_request(
        &state,
        JsonRpcRequest::new(1, "initialize", Some(json!({ "protocolVersion": "2025-03-26" }))),
    )
    .await
    .unwrap();
    let result = response.result.unwrap();

    assert_eq!(result["protocolVersion"], "2025-03-26");
    assert_eq!(result["serverInfo"]["name"], "docs-mcp-server");
    assert!(result["capabilities"].get("tools").is_none());
    assert!(!state.is_initialized().await);

    let ack = process_request(
        &state,
        JsonRpcRequest::new(2, "notifications/initialized", None),
    )
    .await;
    assert!(ack.is_none());
    assert!(state.is_initialized().await);
    assert_eq!(state.protocol_version().await.as_deref(), Some("2025-03-26"));
}

#[tokio::test]
async fn resources_read_returns_contents() {
    let json = call(
        "resources/read",
        Some(json!({ "uri": "docs://onboarding/checklist" })),
    )
    .await;

    assert_eq!(json["id"], 1);
    assert_eq!(json["result"]["contents"][0]["mimeType"], "text/plain");
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn missing_resource_maps_to_resource_not_found() {
    let json = call("resources/read", Some(json!({ "uri": "docs://missing" }))).await;

    assert_eq!(json["error"]["code"], -32002);
    assert_eq!(json["error"]["message"], "Resource not found: docs://missing");
}

#[tokio::test]
async fn missing_prompt_maps_to_invalid_params() {
    let json = call("prompts/get", Some(json!({ "name": "nope" }))).await;

    assert_eq!(json["error"]["code"], -32602);
    assert_eq!(json["error"]["message"], "Prompt not found: nope");
}

#[tokio::test]
async fn unknown_method_and_bad_params() {
    let json = call("tools/list", None).await;
    assert_eq!(json["error"]["code"], -32601);

    let json = call("resources/read", None).await;
    assert_eq!(json["error"]["code"], -32602);
}

#[tokio::test]
async fn wrong_jsonrpc_version_is_rejected() {
    let mut request = JsonRpcRequest::new(7, "resources/list", None);
    request.jsonrpc = "1.0".to_string();

    let response = process_request(&state(), request).await.unwrap();
    assert_eq!(response.error.unwrap().code, -32600);
}

#[tokio::test]
async fn notifications_get_no_response() {
    let mut request = JsonRpcRequest::new(0, "notifications/cancelled", None);
    request.id = None;

    assert!(process_request(&state(), request).await.is_none());
}

#[tokio::test]
async fn router_serves_rpc_endpoint() {
    let app = HttpTransport::new(HttpConfig::default()).router(state());

    let body = json!({ "jsonrpc": "2.0", "id": 3, "method": "prompts/list" });
    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes: Bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    let names: Vec<&str> = json["result"]["prompts"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p["name"].as_str())
        .collect();
    assert!(names.contains(&"onboard_client"));
}

#[tokio::test]
async fn router_serves_health() {
    let app = HttpTransport::new(HttpConfig::default()).router(state());

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn router_accepts_notifications_without_body() {
    let app = HttpTransport::new(HttpConfig::default()).router(state());

    let body = json!({ "jsonrpc": "2.0", "method": "notifications/initialized" });
    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let bytes: Bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
}
