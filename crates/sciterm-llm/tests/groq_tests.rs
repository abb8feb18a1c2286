//! Integration tests for the Groq provider against a local stub server

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use sciterm_domain::traits::LlmProvider;
use sciterm_llm::{GroqProvider, LlmError};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// How the stub answers every request
#[derive(Clone, Copy)]
enum Behaviour {
    Reply,
    Status(StatusCode),
    FailThenReply,
    Garbage,
}

#[derive(Clone)]
struct StubState {
    behaviour: Behaviour,
    calls: Arc<AtomicUsize>,
}

async fn completions(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let call = state.calls.fetch_add(1, Ordering::SeqCst);

    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        == Some("Bearer test-key");
    if !authorized {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let prompt = body["messages"][0]["content"].as_str().unwrap_or_default();
    let reply = Json(json!({
        "choices": [{"message": {"role": "assistant", "content": format!("  echo: {}  ", prompt)}}]
    }));

    match state.behaviour {
        Behaviour::Reply => reply.into_response(),
        Behaviour::Status(status) => (status, "stub failure").into_response(),
        Behaviour::FailThenReply if call == 0 => {
            (StatusCode::INTERNAL_SERVER_ERROR, "try again").into_response()
        }
        Behaviour::FailThenReply => reply.into_response(),
        Behaviour::Garbage => "not json".into_response(),
    }
}

/// Start a stub server and return its base URL and call counter
async fn spawn_stub(behaviour: Behaviour) -> (String, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let state = StubState {
        behaviour,
        calls: Arc::clone(&calls),
    };
    let app = Router::new()
        .route("/openai/v1/chat/completions", post(completions))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), calls)
}

fn provider(endpoint: &str, key: &str) -> GroqProvider {
    GroqProvider::new(key, "llama-test")
        .unwrap()
        .with_endpoint(endpoint)
        .with_retry_backoff(Duration::from_millis(10))
        .with_timeout(Duration::from_secs(5))
}

#[tokio::test]
async fn test_generate_returns_trimmed_content() {
    let (endpoint, calls) = spawn_stub(Behaviour::Reply).await;
    let provider = provider(&endpoint, "test-key");

    let text = provider.generate("Osmosis").await.unwrap();
    assert_eq!(text, "echo: Osmosis");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(provider.model_name(), "llama-test");
}

#[tokio::test]
async fn test_bad_key_is_authentication_error() {
    let (endpoint, calls) = spawn_stub(Behaviour::Reply).await;
    let provider = provider(&endpoint, "wrong-key");

    let result = provider.generate("Osmosis").await;
    assert!(matches!(result, Err(LlmError::Authentication(_))));
    assert_eq!(calls.load(Ordering::SeqCst), 1, "auth errors are not retried");
}

#[tokio::test]
async fn test_not_found_is_model_not_available() {
    let (endpoint, _) = spawn_stub(Behaviour::Status(StatusCode::NOT_FOUND)).await;
    let result = provider(&endpoint, "test-key").generate("x").await;
    match result {
        Err(LlmError::ModelNotAvailable(model)) => assert_eq!(model, "llama-test"),
        other => panic!("Expected ModelNotAvailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_rate_limit() {
    let (endpoint, _) = spawn_stub(Behaviour::Status(StatusCode::TOO_MANY_REQUESTS)).await;
    let result = provider(&endpoint, "test-key").generate("x").await;
    assert!(matches!(result, Err(LlmError::RateLimitExceeded)));
}

#[tokio::test]
async fn test_server_error_is_retried() {
    let (endpoint, calls) = spawn_stub(Behaviour::FailThenReply).await;
    let text = provider(&endpoint, "test-key").generate("Entropy").await.unwrap();
    assert_eq!(text, "echo: Entropy");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_retries_exhausted() {
    let (endpoint, calls) = spawn_stub(Behaviour::Status(StatusCode::BAD_GATEWAY)).await;
    let result = provider(&endpoint, "test-key")
        .with_max_retries(2)
        .generate("x")
        .await;
    assert!(matches!(result, Err(LlmError::Communication(_))));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_unparseable_body_is_invalid_response() {
    let (endpoint, _) = spawn_stub(Behaviour::Garbage).await;
    let result = provider(&endpoint, "test-key").generate("x").await;
    assert!(matches!(result, Err(LlmError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_unreachable_endpoint() {
    // Port 9 (discard) is not expected to run an HTTP server
    let result = provider("http://127.0.0.1:9", "test-key")
        .with_max_retries(1)
        .generate("x")
        .await;
    assert!(matches!(result, Err(LlmError::Communication(_))));
}
