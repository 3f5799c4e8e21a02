//! Tests for the chat-completions client

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::config::AgentConfig;
use crate::error::ApiFailure;
use crate::services::RealAnalysisClient;
use crate::traits::AnalysisClient;

fn client_for(server: &MockServer) -> RealAnalysisClient {
    let config = AgentConfig::default()
        .with_base_url(format!("{}/v1", server.uri()))
        .with_api_key("sk-test")
        .with_model("test-model");
    RealAnalysisClient::new(&config).unwrap()
}

fn keywords() -> Vec<String> {
    vec!["FHIR consulting".to_string()]
}

fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-1",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content }, "finish_reason": "stop" }
        ],
        "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
    })
}

#[tokio::test]
async fn test_analyze_returns_message_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(r#"{"summary":"ok"}"#)))
        .expect(1)
        .mount(&server)
        .await;

    let text = client_for(&server)
        .analyze("<h1>Mobtronic</h1>", &keywords(), Some(r#"{"summary":"before"}"#.to_string()))
        .await
        .unwrap();
    assert_eq!(text, r#"{"summary":"ok"}"#);

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["model"], json!("test-model"));
    assert_eq!(body["response_format"], json!({ "type": "json_object" }));
    assert_eq!(body["messages"][0]["role"], json!("system"));
    assert_eq!(body["messages"][1]["role"], json!("user"));
    let prompt = body["messages"][1]["content"].as_str().unwrap();
    assert!(prompt.contains("<h1>Mobtronic</h1>"));
    assert!(prompt.contains(r#"{"summary":"before"}"#));
    assert!(prompt.contains("'FHIR consulting'"));
}

#[tokio::test]
async fn test_missing_api_key_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("{}")))
        .expect(0)
        .mount(&server)
        .await;

    let config = AgentConfig::default().with_base_url(server.uri());
    let client = RealAnalysisClient::new(&config).unwrap();

    let err = client.analyze("content", &keywords(), None).await.unwrap_err();
    assert_eq!(err, ApiFailure::MissingApiKey);
}

#[tokio::test]
async fn test_status_codes_map_to_failures() {
    for (status, expected) in [
        (401, ApiFailure::AuthenticationFailed),
        (429, ApiFailure::RateLimitExceeded),
        (503, ApiFailure::ServiceUnavailable),
    ] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let err = client_for(&server).analyze("content", &keywords(), None).await.unwrap_err();
        assert_eq!(err, expected, "status {status}");
    }
}

#[tokio::test]
async fn test_other_error_status_is_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).analyze("content", &keywords(), None).await.unwrap_err();
    assert!(matches!(err, ApiFailure::ServerError(_)));
}

#[tokio::test]
async fn test_response_without_content_is_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = client_for(&server).analyze("content", &keywords(), None).await.unwrap_err();
    assert!(matches!(err, ApiFailure::InvalidResponse(_)));
}
