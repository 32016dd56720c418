//! Test utilities for provider tests.
//!
//! `FakeProvider` is a throwaway chat-completions server on an ephemeral
//! port that records every request it receives.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use storybook_models::{CallObserver, CallRecord};

/// Keeps every call record it is handed.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    records: Mutex<Vec<CallRecord>>,
}

impl RecordingObserver {
    pub fn records(&self) -> Vec<CallRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl CallObserver for RecordingObserver {
    fn observe(&self, record: &CallRecord) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record.clone());
        }
    }
}

/// How the fake provider answers.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum FakeReply {
    /// 200 with one choice carrying this text
    Completion(String),
    /// 200 with an empty `choices` array
    NoChoices,
    /// 200 with a body that is not JSON
    Malformed,
    /// The given status with a plain-text body
    Status(u16, String),
}

/// A request as seen by the fake provider.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct FakeState {
    reply: FakeReply,
    seen: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct FakeProvider {
    base_url: String,
    seen: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeProvider {
    pub async fn start(reply: FakeReply) -> anyhow::Result<Self> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            reply,
            seen: seen.clone(),
        };
        let app = Router::new()
            .route("/v1/chat/completions", post(complete))
            .route("/v1/models", get(list_models))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://{}/v1", addr),
            seen,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.seen.lock().unwrap().clone()
    }
}

async fn complete(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state
        .seen
        .lock()
        .unwrap()
        .push(RecordedRequest { authorization, body });

    match state.reply {
        FakeReply::Completion(text) => Json(json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "created": 0,
            "model": "gpt-4",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": text},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 12, "completion_tokens": 5, "total_tokens": 17}
        }))
        .into_response(),
        FakeReply::NoChoices => Json(json!({"id": "chatcmpl-test", "choices": []})).into_response(),
        FakeReply::Malformed => (StatusCode::OK, "definitely not json").into_response(),
        FakeReply::Status(code, message) => (
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            message,
        )
            .into_response(),
    }
}

async fn list_models(State(state): State<FakeState>) -> Response {
    match state.reply {
        FakeReply::Status(code, message) => (
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            message,
        )
            .into_response(),
        _ => Json(json!({"object": "list", "data": [{"id": "gpt-4", "object": "model"}]}))
            .into_response(),
    }
}
