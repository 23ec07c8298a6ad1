//! Integration tests for the LLM providers
//!
//! Validates request/response handling and error mapping against mock
//! HTTP servers.

use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use sitewright_engine::config::{AnthropicConfig, OllamaConfig, OpenAIConfig};
use sitewright_engine::llm::{
    anthropic::AnthropicProvider, ollama::OllamaProvider, openai::OpenAIProvider, LLMError,
    LLMProvider,
};

fn openai_provider(uri: String) -> OpenAIProvider {
    OpenAIProvider::new(
        OpenAIConfig {
            base_url: uri,
            model: "gpt-4o-mini".to_string(),
        },
        "test-key",
        5,
    )
}

#[tokio::test]
async fn test_openai_returns_first_choice_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(json!({"model": "gpt-4o-mini"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "hello from the model"}}
            ]
        })))
        .mount(&mock_server)
        .await;

    let out = openai_provider(mock_server.uri())
        .complete("hi")
        .await
        .expect("call should succeed");
    assert_eq!(out, "hello from the model");
}

#[tokio::test]
async fn test_openai_null_content_reads_as_empty_completion() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        })))
        .mount(&mock_server)
        .await;

    let out = openai_provider(mock_server.uri())
        .complete("hi")
        .await
        .expect("call should succeed");
    assert_eq!(out, "");
}

#[tokio::test]
async fn test_openai_missing_choices_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"object": "chat.completion"})))
        .mount(&mock_server)
        .await;

    let err = openai_provider(mock_server.uri())
        .complete("hi")
        .await
        .expect_err("call should fail");
    assert!(matches!(err, LLMError::ParseError(_)));
}

#[tokio::test]
async fn test_openai_auth_failure_mapping() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let err = openai_provider(mock_server.uri())
        .complete("hi")
        .await
        .expect_err("call should fail");
    assert!(matches!(err, LLMError::AuthenticationFailed(_)));
}

#[tokio::test]
async fn test_openai_rate_limit_mapping() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let err = openai_provider(mock_server.uri())
        .complete("hi")
        .await
        .expect_err("call should fail");
    assert!(matches!(err, LLMError::RateLimitExceeded));
}

#[tokio::test]
async fn test_openai_server_error_mapping() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let err = openai_provider(mock_server.uri())
        .complete("hi")
        .await
        .expect_err("call should fail");
    assert!(matches!(err, LLMError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_anthropic_concatenates_text_blocks() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [
                {"type": "text", "text": "Hello"},
                {"type": "text", "text": " world"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let provider = AnthropicProvider::new(
        AnthropicConfig {
            base_url: mock_server.uri(),
            model: "claude-sonnet-4-5".to_string(),
        },
        "test-key",
        5,
    );

    let out = provider.complete("hi").await.expect("call should succeed");
    assert_eq!(out, "Hello world");
}

#[tokio::test]
async fn test_anthropic_missing_content_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "msg_1"})))
        .mount(&mock_server)
        .await;

    let provider = AnthropicProvider::new(
        AnthropicConfig {
            base_url: mock_server.uri(),
            model: "claude-sonnet-4-5".to_string(),
        },
        "test-key",
        5,
    );

    let err = provider.complete("hi").await.expect_err("call should fail");
    assert!(matches!(err, LLMError::ParseError(_)));
}

#[tokio::test]
async fn test_ollama_returns_message_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({"stream": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "llama3.1:8b",
            "message": {"role": "assistant", "content": "local hello"},
            "done": true
        })))
        .mount(&mock_server)
        .await;

    let provider = OllamaProvider::new(
        OllamaConfig {
            base_url: mock_server.uri(),
            model: "llama3.1:8b".to_string(),
        },
        5,
    );

    let out = provider.complete("hi").await.expect("call should succeed");
    assert_eq!(out, "local hello");
}

#[tokio::test]
async fn test_unreachable_provider_is_a_transport_error() {
    // Nothing listens on this port
    let provider = OllamaProvider::new(
        OllamaConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            model: "llama3.1:8b".to_string(),
        },
        2,
    );

    let err = provider.complete("hi").await.expect_err("call should fail");
    assert!(matches!(
        err,
        LLMError::ProviderUnavailable(_) | LLMError::NetworkError(_) | LLMError::Timeout
    ));
}
