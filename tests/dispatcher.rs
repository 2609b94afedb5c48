//! End-to-end scenarios through the public dispatcher API.

use docs_mcp_server::core::{CatalogProfile, Config, McpServer};
use docs_mcp_server::domains::dispatch::{DispatchError, Request, Response};
use docs_mcp_server::domains::prompts::PromptArguments;
use rmcp::model::{PromptMessageContent, ResourceContents};
use serde_json::json;

fn server(profile: CatalogProfile) -> McpServer {
    let mut config = Config::default();
    config.catalog.profile = profile;
    McpServer::new(config).unwrap()
}

fn text_of(contents: &ResourceContents) -> (&str, Option<&str>, &str) {
    match contents {
        ResourceContents::TextResourceContents {
            uri,
            mime_type,
            text,
            ..
        } => (uri.as_str(), mime_type.as_deref(), text.as_str()),
        other => panic!("expected text contents, got {:?}", other),
    }
}

fn message_texts(result: &rmcp::model::GetPromptResult) -> Vec<String> {
    result
        .messages
        .iter()
        .map(|m| match &m.content {
            PromptMessageContent::Text { text, .. } => text.clone(),
            other => panic!("expected text message, got {:?}", other),
        })
        .collect()
}

#[test]
fn reads_the_onboarding_checklist() {
    let server = server(CatalogProfile::Onboarding);

    let result = server
        .dispatcher()
        .read_resource("docs://onboarding/checklist")
        .unwrap();

    assert_eq!(result.contents.len(), 1);
    let (uri, mime_type, text) = text_of(&result.contents[0]);
    assert_eq!(uri, "docs://onboarding/checklist");
    assert_eq!(mime_type, Some("text/plain"));
    assert!(text.starts_with("# Checklist"));
}

#[test]
fn unknown_resource_is_not_found() {
    let server = server(CatalogProfile::Onboarding);

    let err = server
        .dispatcher()
        .dispatch(Request::ReadResource {
            id: "docs://missing".to_string(),
        })
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Resource not found: docs://missing");
}

#[test]
fn every_listed_resource_is_readable() {
    for profile in CatalogProfile::ALL {
        let server = server(profile);
        let dispatcher = server.dispatcher();

        for resource in dispatcher.list_resources().resources {
            let result = dispatcher.read_resource(&resource.raw.uri).unwrap();
            let (uri, mime_type, _) = text_of(&result.contents[0]);
            assert_eq!(uri, resource.raw.uri);
            assert_eq!(mime_type, resource.raw.mime_type.as_deref());
            assert!(resource.raw.title.is_some());
        }
    }
}

#[test]
fn listing_is_stable() {
    let server = server(CatalogProfile::Engineering);
    let dispatcher = server.dispatcher();

    let first: Vec<String> = dispatcher
        .list_resources()
        .resources
        .into_iter()
        .map(|r| r.raw.uri)
        .collect();
    let second: Vec<String> = dispatcher
        .list_resources()
        .resources
        .into_iter()
        .map(|r| r.raw.uri)
        .collect();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn onboard_client_uses_supplied_and_fallback_values() {
    let server = server(CatalogProfile::Onboarding);

    let mut arguments = PromptArguments::new();
    arguments.insert("client_name".to_string(), "Acme".to_string());

    let result = server
        .dispatcher()
        .get_prompt("onboard_client", &arguments)
        .unwrap();

    assert_eq!(result.description.as_deref(), Some("Onboarding plan for Acme"));
    let text = message_texts(&result).join("\n");
    assert!(text.contains("Acme"));
    assert!(text.contains("web application"));
}

#[test]
fn required_arguments_are_not_enforced() {
    let server = server(CatalogProfile::Onboarding);

    let result = server
        .dispatcher()
        .get_prompt("onboard_client", &PromptArguments::new())
        .unwrap();

    assert_eq!(result.description.as_deref(), Some("Onboarding plan for client"));
    let text = message_texts(&result).join("\n");
    assert!(text.contains("We have just signed client for a web application project"));
    assert!(!text.contains("{{"));
}

#[test]
fn rendering_is_deterministic() {
    let server = server(CatalogProfile::Engineering);

    let mut arguments = PromptArguments::new();
    arguments.insert("version".to_string(), "2.4.0".to_string());

    let first = server
        .dispatcher()
        .get_prompt("plan_release", &arguments)
        .unwrap();
    let second = server
        .dispatcher()
        .get_prompt("plan_release", &arguments)
        .unwrap();

    assert_eq!(first.description, second.description);
    assert_eq!(message_texts(&first), message_texts(&second));
}

#[test]
fn unknown_prompt_is_not_found() {
    let server = server(CatalogProfile::Onboarding);

    let err = server
        .dispatcher()
        .get_prompt("does-not-exist", &PromptArguments::new())
        .unwrap_err();

    assert!(matches!(err, DispatchError::Prompt(_)));
    assert_eq!(err.to_string(), "Prompt not found: does-not-exist");
}

#[test]
fn failures_do_not_affect_later_requests() {
    let server = server(CatalogProfile::Onboarding);
    let dispatcher = server.dispatcher();

    assert!(dispatcher.read_resource("docs://missing").is_err());
    assert!(dispatcher.read_resource("docs://onboarding/checklist").is_ok());
}

#[test]
fn parsed_requests_dispatch_to_json() {
    let server = server(CatalogProfile::Onboarding);

    let request = Request::from_method(
        "prompts/get",
        Some(json!({
            "name": "onboard_client",
            "arguments": { "client_name": "Acme", "project_type": "mobile app" }
        })),
    )
    .unwrap();

    let response = server.dispatcher().dispatch(request).unwrap();
    assert!(matches!(response, Response::Prompt(_)));

    let json = response.to_json().unwrap();
    assert_eq!(json["description"], "Onboarding plan for Acme");
    assert_eq!(json["messages"][0]["role"], "user");
    assert!(
        json["messages"][0]["content"]["text"]
            .as_str()
            .unwrap()
            .contains("mobile app")
    );
}

#[test]
fn server_info_reports_profile() {
    let server = server(CatalogProfile::Engineering);

    let result = server
        .dispatcher()
        .read_resource("docs://server/info")
        .unwrap();
    let (_, mime_type, text) = text_of(&result.contents[0]);

    assert_eq!(mime_type, Some("application/json"));
    let info: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(info["profile"], "engineering");
    assert_eq!(info["prompts"], server.dispatcher().prompts().len());
    assert_eq!(info["resources"], server.dispatcher().resources().len());
}

#[test]
fn profiles_serve_distinct_catalogs() {
    let onboarding = server(CatalogProfile::Onboarding);
    let engineering = server(CatalogProfile::Engineering);

    assert!(
        engineering
            .dispatcher()
            .read_resource("docs://onboarding/checklist")
            .unwrap_err()
            .is_not_found()
    );
    assert!(
        onboarding
            .dispatcher()
            .get_prompt("review_code", &PromptArguments::new())
            .unwrap_err()
            .is_not_found()
    );
}
