//! Wire-level tests for the model client against a local HTTP server.
//!
//! These go through the real reqwest adapter, so they check the exact
//! request shape the service sees.

mod common;

use common::{candidate_body, config_for, generate_path, TEST_KEY, TEST_MODEL};
use omnitool::genai::{generate_loader_script, GenAiClient, GenAiError, GenerateContentRequest};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> GenAiClient {
    GenAiClient::from_config(&config_for(&server.uri())).expect("client should build")
}

async fn request_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| serde_json::from_slice(&r.body).expect("request body is JSON"))
        .collect()
}

#[tokio::test]
async fn test_generate_content_request_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .and(header("x-goog-api-key", TEST_KEY))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("pong")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let request = GenerateContentRequest::prompt("ping").with_system_instruction("Be brief.");
    let text = client.generate_content(TEST_MODEL, &request).await.unwrap();
    assert_eq!(text, "pong");

    let bodies = request_bodies(&server).await;
    assert_eq!(
        bodies[0],
        json!({
            "systemInstruction": {"parts": [{"text": "Be brief."}]},
            "contents": [{"role": "user", "parts": [{"text": "ping"}]}]
        })
    );
}

#[tokio::test]
async fn test_error_status_uses_service_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .generate_content(TEST_MODEL, &GenerateContentRequest::prompt("hi"))
        .await
        .unwrap_err();

    match err {
        GenAiError::Status { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "API key not valid.");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_error_status_with_plain_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .generate_content(TEST_MODEL, &GenerateContentRequest::prompt("hi"))
        .await
        .unwrap_err();

    assert!(err.category().is_retryable());
    assert!(err.to_string().contains("upstream unavailable"));
}

#[tokio::test]
async fn test_blocked_prompt_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"promptFeedback": {"blockReason": "SAFETY"}})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .generate_content(TEST_MODEL, &GenerateContentRequest::prompt("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, GenAiError::EmptyResponse));
}

#[tokio::test]
async fn test_chat_session_resends_history() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "first"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("one")))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("two")))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let mut session = client.start_chat("You are Gem Coder.");
    assert_eq!(session.send_message("first").await.unwrap(), "one");
    assert_eq!(session.send_message("second").await.unwrap(), "two");

    let bodies = request_bodies(&server).await;
    assert_eq!(bodies.len(), 2);
    assert_eq!(
        bodies[1]["contents"],
        json!([
            {"role": "user", "parts": [{"text": "first"}]},
            {"role": "model", "parts": [{"text": "one"}]},
            {"role": "user", "parts": [{"text": "second"}]}
        ])
    );
    assert_eq!(
        bodies[1]["systemInstruction"]["parts"][0]["text"],
        "You are Gem Coder."
    );
}

#[tokio::test]
async fn test_loader_script_strips_fences() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(candidate_body("```python\nimport struct\nprint('ok')\n```")),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let script = generate_loader_script(&client, "a.bin", "application/octet-stream", "00 01").await;
    assert_eq!(script, "import struct\nprint('ok')");

    let bodies = request_bodies(&server).await;
    let prompt = bodies[0]["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("\"a.bin\""));
    assert!(prompt.contains("00 01"));
    assert!(bodies[0].get("systemInstruction").is_none());
}

#[tokio::test]
async fn test_loader_script_failure_becomes_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let script = generate_loader_script(&client, "a.bin", "application/octet-stream", "00").await;
    assert!(script.starts_with("# Error generating smart script.\n# Details: "));
    assert!(script.contains("500"));
}
