use super::*;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Debug, Clone)]
struct CapturedRequest {
    call: String,
    api_key: Option<String>,
    body: Value,
}

#[derive(Clone)]
struct FakeGemini {
    status: StatusCode,
    reply: Value,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

async fn generate_content(
    State(state): State<FakeGemini>,
    Path(call): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.captured.lock().await.push(CapturedRequest {
        call,
        api_key: headers
            .get("x-goog-api-key")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body,
    });
    (state.status, Json(state.reply.clone()))
}

async fn spawn_fake_gemini(status: StatusCode, reply: Value) -> (String, FakeGemini) {
    let state = FakeGemini {
        status,
        reply,
        captured: Arc::new(Mutex::new(Vec::new())),
    };
    let app = Router::new()
        .route("/v1beta/models/:call", post(generate_content))
        .with_state(state.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    (format!("http://{addr}/v1beta"), state)
}

fn provider(base_url: String, api_key: Option<&str>) -> GeminiProvider {
    GeminiProvider::new(GeminiConfig {
        api_key: api_key.map(str::to_string),
        api_base_url: base_url,
        request_timeout: Some(Duration::from_secs(5)),
    })
    .expect("provider")
}

fn request(web_search: bool) -> CompletionRequest {
    CompletionRequest {
        model: DEFAULT_MODEL.to_string(),
        prompt: "give me news".to_string(),
        web_search,
    }
}

#[tokio::test]
async fn sends_prompt_with_search_tool_and_joins_text_parts() {
    let reply = json!({
        "candidates": [{
            "content": { "parts": [{ "text": "```json\n{" }, { "text": "}\n```" }] }
        }]
    });
    let (base_url, state) = spawn_fake_gemini(StatusCode::OK, reply).await;

    let response = provider(base_url, Some("secret-key"))
        .generate(request(true))
        .await
        .expect("completion");
    assert_eq!(response.text.as_deref(), Some("```json\n{}\n```"));

    let captured = state.captured.lock().await;
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].call, "gemini-2.5-flash:generateContent");
    assert_eq!(captured[0].api_key.as_deref(), Some("secret-key"));
    assert_eq!(captured[0].body["contents"][0]["parts"][0]["text"], "give me news");
    assert_eq!(captured[0].body["tools"][0], json!({ "googleSearch": {} }));
}

#[tokio::test]
async fn omits_tools_without_web_search() {
    let reply = json!({ "candidates": [{ "content": { "parts": [{ "text": "hi" }] } }] });
    let (base_url, state) = spawn_fake_gemini(StatusCode::OK, reply).await;

    provider(base_url, Some("k"))
        .generate(request(false))
        .await
        .expect("completion");

    let captured = state.captured.lock().await;
    assert!(captured[0].body.get("tools").is_none());
}

#[tokio::test]
async fn missing_candidates_yield_no_text() {
    let (base_url, _state) = spawn_fake_gemini(StatusCode::OK, json!({ "candidates": [] })).await;

    let response = provider(base_url, Some("k"))
        .generate(request(true))
        .await
        .expect("completion");
    assert_eq!(response.text, None);
}

#[tokio::test]
async fn error_status_is_reported_with_body() {
    let reply = json!({ "error": { "message": "quota exhausted" } });
    let (base_url, _state) = spawn_fake_gemini(StatusCode::TOO_MANY_REQUESTS, reply).await;

    let err = provider(base_url, Some("k"))
        .generate(request(true))
        .await
        .expect_err("status error");
    match err {
        ProviderError::Status { status, body } => {
            assert_eq!(status, 429);
            assert!(body.contains("quota exhausted"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn missing_key_fails_before_any_request() {
    let (base_url, state) = spawn_fake_gemini(StatusCode::OK, json!({})).await;
    let provider = provider(base_url, Some("   "));
    assert!(!provider.has_credential());

    let err = provider.generate(request(true)).await.expect_err("no key");
    assert!(matches!(err, ProviderError::MissingCredential));
    assert!(state.captured.lock().await.is_empty());
}
