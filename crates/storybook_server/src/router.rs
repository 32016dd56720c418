//! Router construction and serving.

use crate::{AppState, ServerConfig, generate_story, health_check, method_not_allowed};
use axum::{
    Router,
    routing::{get, post},
};
use std::future::Future;
use storybook_core::GENERATE_STORY_PATH;
use storybook_error::HttpError;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Creates the story router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            GENERATE_STORY_PATH,
            post(generate_story).fallback(method_not_allowed),
        )
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve<F>(config: &ServerConfig, state: AppState, shutdown: F) -> Result<(), HttpError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| HttpError::new(format!("Failed to bind {}: {}", address, e)))?;

    info!(address = %address, model = config.model(), "Story endpoint listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| HttpError::new(format!("Server error: {}", e)))
}
