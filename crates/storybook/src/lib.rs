//! Storybook - journal entries to a pediatric storybook paragraph
//!
//! A journal form collects free-text entries, one text area per week. The
//! entries are normalized into trimmed, non-empty lines and posted to
//! `POST /api/generate-story`, which asks a chat-completion model for a
//! short, supportive storybook paragraph. The presentation controller shows
//! the result and can narrate it, record a voice track next to it, and
//! export it as PNG or PDF.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use storybook::{AppState, OpenAIClient, OpenAIConfig, ServerConfig, serve};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::load(None)?;
//!     let driver = Arc::new(OpenAIClient::new(OpenAIConfig::from_env()?));
//!     serve(&config, AppState::new(driver, &config), async {
//!         let _ = tokio::signal::ctrl_c().await;
//!     })
//!     .await?;
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - export tracing spans through OpenTelemetry
//! - `api` - enable tests that call the real provider
//!
//! # Architecture
//!
//! - `storybook_error` - error kinds with source locations
//! - `storybook_core` - normalization, wire types, prompt construction
//! - `storybook_interface` - provider, transport and host media traits
//! - `storybook_models` - OpenAI-compatible provider client and metrics
//! - `storybook_server` - the story endpoint
//! - `storybook_client` - the presentation controller
//!
//! This crate re-exports everything for convenience and ships the
//! `storybook` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod alerts;
mod observability;

pub use alerts::TerminalAlerts;
pub use observability::{
    ObservabilityConfig, init_observability, init_observability_with_config,
    shutdown_observability,
};

pub use storybook_client::{
    CELEBRATION_DURATION, DEFAULT_PREFERRED_VOICES, ExportFormat, Exporter, HttpStoryTransport,
    JournalForm, NarrationConfig, NarrationConfigBuilder, Narrator, PresentationController,
    Recorder, STORY_TITLE, SubmitOutcome, UiState, select_voice,
};
pub use storybook_core::{
    EntryList, GENERATE_STORY_PATH, GenerateRequest, GenerateRequestBuilder, GenerateResponse,
    GenerateResponseBuilder, JournalText, Message, MessageBuilder, Output, Role, STORY_MAX_TOKENS,
    STORY_MODEL, StoryRequest, StoryResponse, normalize, story_generate_request, story_prompt,
};
pub use storybook_error::{
    ConfigError, HttpError, PresentationError, PresentationErrorKind,
    PresentationResult, ProviderError, ProviderErrorKind, ProviderResult, StoryError,
    StoryErrorKind, StorybookError, StorybookErrorKind, StorybookResult,
};
pub use storybook_interface::{
    AlertSink, AudioCapture, AudioClip, CaptureSession, Download, DownloadSink, Health,
    HealthStatus, PageOrientation, PdfAssembler, PdfPage, RasterImage, Rasterizer,
    SpeechSynthesizer, StoryDriver, StoryTransport, StoryView, Utterance, UtteranceBuilder, Voice,
};
pub use storybook_models::{CallObserver, CallRecord, LlmMetrics, OpenAIClient, OpenAIConfig};
pub use storybook_server::{ApiError, AppState, ServerConfig, create_router, serve};
