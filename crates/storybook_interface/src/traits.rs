//! Trait definitions for story generation.

use crate::HealthStatus;
use async_trait::async_trait;
use storybook_core::{GenerateRequest, GenerateResponse};
use storybook_error::{PresentationResult, StorybookResult};

/// Core trait every text-generation provider implements.
///
/// The story endpoint makes exactly one `generate` call per request.
#[async_trait]
pub trait StoryDriver: Send + Sync {
    /// Generate model output for a request.
    async fn generate(&self, req: &GenerateRequest) -> StorybookResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4").
    fn model_name(&self) -> &str;
}

/// Trait for providers that support health checks.
#[async_trait]
pub trait Health: StoryDriver {
    /// Check if the provider is reachable and functioning.
    async fn health(&self) -> StorybookResult<HealthStatus>;
}

/// The story endpoint as seen from the journal form.
#[async_trait]
pub trait StoryTransport: Send + Sync {
    /// Submit normalized entries and receive the generated story.
    ///
    /// # Errors
    ///
    /// Any non-200 answer or failure to reach the endpoint is a
    /// `ClientTransportFailure`.
    async fn generate_story(&self, entries: &[String]) -> PresentationResult<String>;
}
