//! Test utilities for the story endpoint.

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use storybook_core::{GenerateRequest, GenerateResponse, Output};
use storybook_error::{ProviderError, ProviderErrorKind, StorybookResult};
use storybook_interface::StoryDriver;
use storybook_server::{AppState, ServerConfig, create_router};
use tower::ServiceExt;

/// What the mock driver does when called.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockBehavior {
    /// Answer with this completion text
    Reply(String),
    /// Answer with no outputs at all
    Empty,
    /// Fail with an API error carrying this detail
    Fail(String),
}

/// A provider that records calls instead of talking to the network.
#[derive(Debug)]
pub struct MockDriver {
    behavior: MockBehavior,
    calls: AtomicUsize,
    last_request: Mutex<Option<GenerateRequest>>,
}

#[allow(dead_code)]
impl MockDriver {
    pub fn new(behavior: MockBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Self::new(MockBehavior::Reply(text.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoryDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> StorybookResult<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(req.clone());

        match &self.behavior {
            MockBehavior::Reply(text) => Ok(GenerateResponse::builder()
                .outputs(vec![Output::Text(text.clone())])
                .build()
                .unwrap()),
            MockBehavior::Empty => Ok(GenerateResponse::builder()
                .outputs(Vec::new())
                .build()
                .unwrap()),
            MockBehavior::Fail(detail) => Err(ProviderError::new(ProviderErrorKind::Api {
                status: 503,
                message: detail.clone(),
            })
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Router over the given driver with default configuration.
pub fn router_with(driver: Arc<MockDriver>) -> Router {
    router_with_config(driver, &ServerConfig::default())
}

#[allow(dead_code)]
pub fn router_with_config(driver: Arc<MockDriver>, config: &ServerConfig) -> Router {
    create_router(AppState::new(driver, config))
}

/// Send one request and return the status and parsed JSON body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: impl Into<Body>,
) -> anyhow::Result<(StatusCode, Value)> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())?;

    let response = app.oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let json = serde_json::from_slice(&bytes)?;
    Ok((status, json))
}
