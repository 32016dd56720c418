//! Error responses.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use storybook_core::StoryResponse;
use storybook_error::{StoryError, StoryErrorKind};
use tracing::{error, warn};

/// A [`StoryError`] on its way out as an HTTP response.
///
/// Only the kind's public message reaches the caller. Upstream detail is
/// logged and dropped.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub struct ApiError(StoryError);

impl ApiError {
    /// The wrapped error.
    pub fn inner(&self) -> &StoryError {
        &self.0
    }
}

impl From<StoryErrorKind> for ApiError {
    #[track_caller]
    fn from(kind: StoryErrorKind) -> Self {
        Self(StoryError::new(kind))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.0.kind();
        let status =
            StatusCode::from_u16(kind.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = Json(StoryResponse::failure(kind.public_message()));

        match kind {
            StoryErrorKind::UpstreamFailure(_) => {
                error!(error = %self.0, "Story generation failed");
                (status, body).into_response()
            }
            StoryErrorKind::MethodNotAllowed(_) => {
                warn!(error = %self.0, "Rejected story request");
                (status, [(header::ALLOW, "POST")], body).into_response()
            }
            StoryErrorKind::BadRequest(_) => {
                warn!(error = %self.0, "Rejected story request");
                (status, body).into_response()
            }
        }
    }
}
