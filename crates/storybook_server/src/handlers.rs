//! Request handlers.

use crate::{ApiError, AppState};
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::IntoResponse,
};
use serde_json::json;
use storybook_core::{StoryRequest, StoryResponse, story_generate_request};
use storybook_error::StoryErrorKind;
use tracing::{debug, info, instrument};

/// `POST /api/generate-story`.
///
/// Validates the body, sends one prompt to the provider and answers with the
/// trimmed completion.
#[instrument(skip_all, fields(body_len = body.len(), entries = tracing::field::Empty))]
pub async fn generate_story(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StoryResponse>, ApiError> {
    let request = StoryRequest::from_json(&body)?;
    tracing::Span::current().record("entries", request.entries().len());

    if request.entries().is_empty() && state.reject_empty_entries() {
        return Err(StoryErrorKind::BadRequest("entries is empty".into()).into());
    }

    let generate = story_generate_request(request.entries(), state.model());
    debug!(
        provider = state.driver().provider_name(),
        model = state.model(),
        "Requesting story"
    );

    let response = state
        .driver()
        .generate(&generate)
        .await
        .map_err(|e| StoryErrorKind::UpstreamFailure(e.to_string()))?;

    let story = response
        .first_text()
        .map(str::trim)
        .ok_or_else(|| StoryErrorKind::UpstreamFailure("response carried no text".into()))?;

    info!(story_len = story.len(), "Story generated");
    Ok(Json(StoryResponse::success(story)))
}

/// Any method other than POST on the story path.
pub async fn method_not_allowed(method: Method) -> ApiError {
    StoryErrorKind::MethodNotAllowed(method.to_string()).into()
}

/// Health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
