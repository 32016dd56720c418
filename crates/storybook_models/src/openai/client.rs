use super::convert::{from_chat_response, to_chat_request};
use super::dto::{ChatCompletionRequest, ChatCompletionResponse};
use crate::{CallObserver, CallRecord, LlmMetrics, TokenUsage, classify_error};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use storybook_core::{GenerateRequest, GenerateResponse, STORY_MODEL};
use storybook_error::{ProviderError, ProviderErrorKind, StorybookResult};
use storybook_interface::{Health, HealthStatus, StoryDriver};
use tracing::{debug, error, instrument, warn};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Connection settings for an OpenAI-style provider.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OpenAIConfig {
    /// Bearer token sent with every request
    pub api_key: String,
    /// API root, without the `/chat/completions` suffix
    pub base_url: String,
    /// Model used when a request does not name one
    pub model: String,
}

impl OpenAIConfig {
    /// Create a configuration for the public OpenAI API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: STORY_MODEL.to_string(),
        }
    }

    /// Create config from environment variables
    ///
    /// Reads:
    /// - `OPENAI_API_KEY` (required)
    /// - `OPENAI_BASE_URL` (default: "https://api.openai.com/v1")
    /// - `OPENAI_MODEL` (default: "gpt-4")
    pub fn from_env() -> Result<Self, ProviderError> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            ProviderError::new(ProviderErrorKind::Configuration(
                "OPENAI_API_KEY not set".into(),
            ))
        })?;
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| STORY_MODEL.to_string());

        Ok(Self {
            api_key,
            base_url,
            model,
        })
    }

    /// Point the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the fallback model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn models_url(&self) -> String {
        format!("{}/models", self.base_url.trim_end_matches('/'))
    }
}

impl std::fmt::Debug for OpenAIConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

/// Client for OpenAI-style chat-completion APIs.
///
/// One HTTP call per `generate`; no retries and no timeout beyond reqwest's
/// defaults. Each `generate` is reported to a [`CallObserver`], the global
/// [`LlmMetrics`] unless [`with_observer`](Self::with_observer) replaces it.
#[derive(Clone)]
pub struct OpenAIClient {
    config: OpenAIConfig,
    client: reqwest::Client,
    observer: Arc<dyn CallObserver>,
}

impl std::fmt::Debug for OpenAIClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl OpenAIClient {
    /// Create a new client.
    #[instrument(skip(config), fields(base_url = %config.base_url, model = %config.model))]
    pub fn new(config: OpenAIConfig) -> Self {
        debug!("Creating OpenAI client");
        Self {
            config,
            client: reqwest::Client::new(),
            observer: LlmMetrics::global(),
        }
    }

    /// Report calls to `observer` instead of the global metrics.
    pub fn with_observer(mut self, observer: Arc<dyn CallObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Get the client configuration.
    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }

    /// Send a chat completion request.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ProviderError> {
        let url = self.config.completions_url();
        debug!("Sending chat completion request to {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Chat completion request failed");
                ProviderError::new(ProviderErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Provider returned error");
            return Err(ProviderError::new(ProviderErrorKind::Api {
                status: status.as_u16(),
                message: body,
            }));
        }

        let result: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse chat completion response");
            ProviderError::new(ProviderErrorKind::Deserialization(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        debug!(choices = result.choices().len(), "Chat completion successful");
        Ok(result)
    }
}

#[async_trait]
impl StoryDriver for OpenAIClient {
    #[instrument(skip(self, req), fields(provider = "openai", model = %self.config.model))]
    async fn generate(&self, req: &GenerateRequest) -> StorybookResult<GenerateResponse> {
        let chat_request = to_chat_request(req, &self.config.model)?;
        let model = chat_request.model().clone();
        let start = Instant::now();

        let mut usage = None;
        let result = match self.chat_completion(&chat_request).await {
            Ok(response) => {
                usage = response.usage().as_ref().map(|u| TokenUsage {
                    prompt: u64::from(*u.prompt_tokens()),
                    completion: u64::from(*u.completion_tokens()),
                });
                from_chat_response(&response)
            }
            Err(e) => Err(e),
        };

        self.observer.observe(&CallRecord {
            provider: self.provider_name(),
            model,
            elapsed: start.elapsed(),
            usage,
            error_type: result.as_ref().err().map(|e| classify_error(e.kind())),
        });

        result.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl Health for OpenAIClient {
    /// Lists models to confirm the key is accepted.
    #[instrument(skip(self), fields(provider = "openai"))]
    async fn health(&self) -> StorybookResult<HealthStatus> {
        let response = match self
            .client
            .get(self.config.models_url())
            .bearer_auth(&self.config.api_key)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = ?e, "Provider unreachable");
                return Ok(HealthStatus::Unhealthy {
                    message: format!("Request failed: {}", e),
                });
            }
        };

        let status = response.status();
        if status.is_success() {
            Ok(HealthStatus::Healthy)
        } else if status.as_u16() == 429 || status.is_server_error() {
            Ok(HealthStatus::Degraded {
                message: format!("Provider answered {}", status),
            })
        } else {
            Ok(HealthStatus::Unhealthy {
                message: format!("Provider answered {}", status),
            })
        }
    }
}
