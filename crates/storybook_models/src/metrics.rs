//! Accounting for provider calls.
//!
//! Every `generate` call produces one [`CallRecord`] and hands it to a
//! [`CallObserver`]. The default observer is [`LlmMetrics`], which feeds
//! OpenTelemetry instruments. They are no-ops until the host installs a
//! meter provider.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram},
};
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use storybook_error::ProviderErrorKind;

/// Tokens billed for one call, as reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub prompt: u64,
    /// Tokens in the completion
    pub completion: u64,
}

/// One finished provider call.
#[derive(Debug, Clone, PartialEq)]
pub struct CallRecord {
    /// Provider name, e.g. "openai"
    pub provider: &'static str,
    /// Model the request was sent to
    pub model: String,
    /// Wall-clock time of the call
    pub elapsed: Duration,
    /// Usage, when the provider answered with one
    pub usage: Option<TokenUsage>,
    /// Failure label from [`classify_error`], `None` on success
    pub error_type: Option<&'static str>,
}

impl CallRecord {
    /// Whether the call produced a usable completion.
    pub fn is_success(&self) -> bool {
        self.error_type.is_none()
    }
}

/// Receives a record for every provider call.
pub trait CallObserver: Send + Sync {
    /// Account for one call.
    fn observe(&self, record: &CallRecord);
}

/// OpenTelemetry instruments for provider calls.
///
/// - `llm.calls`: counter labelled by provider, model and outcome
/// - `llm.duration`: histogram in seconds
/// - `llm.tokens`: counter labelled by model and kind (prompt or completion)
#[derive(Debug, Clone)]
pub struct LlmMetrics {
    calls: Counter<u64>,
    duration: Histogram<f64>,
    tokens: Counter<u64>,
}

static GLOBAL: OnceLock<Arc<LlmMetrics>> = OnceLock::new();

impl LlmMetrics {
    /// Instruments on the global meter provider.
    pub fn global() -> Arc<Self> {
        GLOBAL
            .get_or_init(|| {
                let meter = global::meter("storybook_llm");
                Arc::new(Self {
                    calls: meter
                        .u64_counter("llm.calls")
                        .with_description("Provider calls by outcome")
                        .build(),
                    duration: meter
                        .f64_histogram("llm.duration")
                        .with_unit("s")
                        .with_description("Provider call duration")
                        .build(),
                    tokens: meter
                        .u64_counter("llm.tokens")
                        .with_description("Tokens billed by the provider")
                        .build(),
                })
            })
            .clone()
    }
}

impl CallObserver for LlmMetrics {
    fn observe(&self, record: &CallRecord) {
        let provider = KeyValue::new("provider", record.provider);
        let model = KeyValue::new("model", record.model.clone());
        let outcome = KeyValue::new("outcome", record.error_type.unwrap_or("success"));

        self.calls
            .add(1, &[provider.clone(), model.clone(), outcome.clone()]);
        self.duration
            .record(record.elapsed.as_secs_f64(), &[provider, model.clone(), outcome]);

        if let Some(usage) = record.usage {
            self.tokens
                .add(usage.prompt, &[model.clone(), KeyValue::new("kind", "prompt")]);
            self.tokens
                .add(usage.completion, &[model, KeyValue::new("kind", "completion")]);
        }
    }
}

/// Label a provider failure for metrics.
///
/// # Examples
///
/// ```
/// use storybook_error::ProviderErrorKind;
/// use storybook_models::classify_error;
///
/// let kind = ProviderErrorKind::Api { status: 429, message: "slow down".into() };
/// assert_eq!(classify_error(&kind), "rate_limit");
/// assert_eq!(classify_error(&ProviderErrorKind::EmptyCompletion), "empty_completion");
/// ```
pub fn classify_error(kind: &ProviderErrorKind) -> &'static str {
    match kind {
        ProviderErrorKind::Api { status: 429, .. } => "rate_limit",
        ProviderErrorKind::Api {
            status: 401 | 403, ..
        } => "auth",
        ProviderErrorKind::Api { status, .. } if *status >= 500 => "server",
        ProviderErrorKind::Api { .. } => "invalid_request",
        ProviderErrorKind::Http(_) => "network",
        ProviderErrorKind::Deserialization(_) => "malformed_response",
        ProviderErrorKind::EmptyCompletion => "empty_completion",
        ProviderErrorKind::Builder(_) | ProviderErrorKind::Configuration(_) => "client",
    }
}
