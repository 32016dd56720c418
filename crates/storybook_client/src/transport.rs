//! HTTP client for the story endpoint.

use async_trait::async_trait;
use storybook_core::{GENERATE_STORY_PATH, StoryRequest, StoryResponse};
use storybook_error::{PresentationError, PresentationErrorKind, PresentationResult};
use storybook_interface::StoryTransport;
use tracing::{debug, instrument, warn};

/// Posts journal entries to a running story endpoint.
#[derive(Debug, Clone)]
pub struct HttpStoryTransport {
    url: String,
    client: reqwest::Client,
}

impl HttpStoryTransport {
    /// Create a transport for the server at `endpoint`, e.g.
    /// `http://127.0.0.1:3000`.
    pub fn new(endpoint: impl AsRef<str>) -> Self {
        Self {
            url: format!(
                "{}{}",
                endpoint.as_ref().trim_end_matches('/'),
                GENERATE_STORY_PATH
            ),
            client: reqwest::Client::new(),
        }
    }

    /// Full URL of the story endpoint.
    pub fn url(&self) -> &str {
        &self.url
    }
}

fn transport_failure(detail: impl Into<String>) -> PresentationError {
    PresentationError::new(PresentationErrorKind::ClientTransportFailure(detail.into()))
}

#[async_trait]
impl StoryTransport for HttpStoryTransport {
    #[instrument(skip(self, entries), fields(url = %self.url, entries = entries.len()))]
    async fn generate_story(&self, entries: &[String]) -> PresentationResult<String> {
        let response = self
            .client
            .post(&self.url)
            .json(&StoryRequest::new(entries.to_vec()))
            .send()
            .await
            .map_err(|e| transport_failure(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body: Option<StoryResponse> = response.json().await.ok();

        if status != reqwest::StatusCode::OK {
            let detail = match body {
                Some(StoryResponse::Error { error }) => error,
                _ => String::from("no error message"),
            };
            warn!(status = %status, detail = %detail, "Story endpoint refused");
            return Err(transport_failure(format!("{}: {}", status, detail)));
        }

        let story = body
            .and_then(StoryResponse::into_story)
            .ok_or_else(|| transport_failure("response carried no story"))?;

        debug!(story_len = story.len(), "Story received");
        Ok(story)
    }
}
