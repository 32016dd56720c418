//! The story endpoint.
//!
//! `POST /api/generate-story` accepts `{"entries": [...]}`, asks the configured
//! [`StoryDriver`](storybook_interface::StoryDriver) for a short pediatric
//! storybook paragraph, and answers with `{"story": ...}`. Failures are
//! answered with `{"error": ...}` and one of 400, 405 or 500.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use storybook_models::{OpenAIClient, OpenAIConfig};
//! use storybook_server::{AppState, ServerConfig, serve};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::load(None)?;
//!     let driver = Arc::new(OpenAIClient::new(OpenAIConfig::from_env()?));
//!     let state = AppState::new(driver, &config);
//!     serve(&config, state, std::future::pending()).await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod handlers;
mod response;
mod router;
mod state;

pub use config::ServerConfig;
pub use handlers::{generate_story, health_check, method_not_allowed};
pub use response::ApiError;
pub use router::{create_router, serve};
pub use state::AppState;
