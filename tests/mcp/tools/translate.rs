use hanloc::mcp::{HanlocMcpServer, types::TranslateComponentsParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{McpTestFixture, extract_tool_result_json};

const API_KEY: &str = "test-api-key-0123456789";

fn chat_response(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    }))
}

fn params(fixture: &McpTestFixture) -> Parameters<TranslateComponentsParams> {
    Parameters(TranslateComponentsParams {
        project_root_path: fixture.root(),
    })
}

#[tokio::test]
async fn test_translate_components_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(chat_response("你好世界"))
        .mount(&server)
        .await;

    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "apiKey": API_KEY, "endpoint": server.uri() }))
        .unwrap();
    fixture
        .write_component("demo_sensor", &json!({"title": "Hello world"}))
        .unwrap();

    let mcp = HanlocMcpServer::new();
    let result = mcp.translate_components(params(&fixture)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["translated"], 1);
    assert_eq!(json_result["skipped"], 0);
    assert_eq!(json_result["errors"], 0);
    assert_eq!(
        json_result["componentsRoot"],
        fixture.root_path().join("custom_components").display().to_string()
    );

    let components = json_result["components"].as_array().unwrap();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0]["name"], "demo_sensor");
    assert_eq!(components[0]["outcome"], "translated");

    let target = fixture.read_target_file("demo_sensor").unwrap();
    assert_eq!(target, json!({"title": "你好世界"}));
}

#[tokio::test]
async fn test_translate_components_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(chat_response("你好世界"))
        .mount(&server)
        .await;

    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "apiKey": API_KEY, "endpoint": server.uri() }))
        .unwrap();
    fixture
        .write_component("demo_sensor", &json!({"title": "Hello world"}))
        .unwrap();

    let mcp = HanlocMcpServer::new();
    mcp.translate_components(params(&fixture)).await.unwrap();

    let second = mcp.translate_components(params(&fixture)).await.unwrap();
    let json_result = extract_tool_result_json(&second);

    assert_eq!(json_result["translated"], 0);
    assert_eq!(json_result["skipped"], 1);
}

#[tokio::test]
async fn test_translate_components_reports_per_component_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(chat_response("好"))
        .mount(&server)
        .await;

    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "apiKey": API_KEY, "endpoint": server.uri() }))
        .unwrap();
    fixture
        .write_component("b_good", &json!({"title": "Good one"}))
        .unwrap();
    // Malformed source file, written by hand to sidestep the JSON helper.
    let broken_dir = fixture
        .root_path()
        .join("custom_components/a_broken/translations");
    std::fs::create_dir_all(&broken_dir).unwrap();
    std::fs::write(broken_dir.join("en.json"), "{not valid json").unwrap();

    let mcp = HanlocMcpServer::new();
    let result = mcp.translate_components(params(&fixture)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["translated"], 1);
    assert_eq!(json_result["errors"], 1);

    let components = json_result["components"].as_array().unwrap();
    let broken = components
        .iter()
        .find(|c| c["name"] == "a_broken")
        .unwrap();
    assert_eq!(broken["outcome"], "error");
    assert!(broken["detail"].is_string());

    assert!(fixture.has_target_file("b_good"));
    assert!(!fixture.has_target_file("a_broken"));
}

#[tokio::test]
async fn test_missing_api_key_is_an_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_component("demo_sensor", &json!({"title": "Hello world"}))
        .unwrap();

    let mcp = HanlocMcpServer::new();
    let err = mcp
        .translate_components(params(&fixture))
        .await
        .unwrap_err();

    assert!(
        err.message.contains("missing_api_key"),
        "got: {}",
        err.message
    );
    assert!(!fixture.has_target_file("demo_sensor"));
}

#[tokio::test]
async fn test_missing_components_root_is_an_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "apiKey": API_KEY, "componentsRoot": "no_such_dir" }))
        .unwrap();

    let mcp = HanlocMcpServer::new();
    let err = mcp
        .translate_components(params(&fixture))
        .await
        .unwrap_err();

    assert!(
        err.message.contains("Components directory not found"),
        "got: {}",
        err.message
    );
}

#[tokio::test]
async fn test_bad_project_root_is_an_error() {
    let mcp = HanlocMcpServer::new();
    let err = mcp
        .translate_components(Parameters(TranslateComponentsParams {
            project_root_path: "/definitely/not/a/real/dir-12345".to_string(),
        }))
        .await
        .unwrap_err();

    assert!(
        err.message.contains("not a directory"),
        "got: {}",
        err.message
    );
}
