//! Presentation controller for the Storybook journal form.
//!
//! The controller owns the weekly journal form, submits its entries through a
//! [`StoryTransport`](storybook_interface::StoryTransport) and tracks the
//! resulting [`UiState`]. Once a story exists it can be narrated, a voice
//! recording can be made alongside it, and it can be exported as PNG or PDF.
//! Every failure is reported through the host's
//! [`AlertSink`](storybook_interface::AlertSink) and none of them is fatal.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use storybook_client::{HttpStoryTransport, PresentationController};
//! use storybook_interface::AlertSink;
//!
//! struct PrintAlerts;
//!
//! impl AlertSink for PrintAlerts {
//!     fn alert(&self, message: &str) {
//!         eprintln!("{}", message);
//!     }
//! }
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = Arc::new(HttpStoryTransport::new("http://127.0.0.1:3000"));
//! let mut controller = PresentationController::new(transport, Arc::new(PrintAlerts));
//!
//! controller.form_mut().set_week(0, "Built a pillow fort\nRead a book")?;
//! controller.submit().await;
//!
//! if let Some(story) = controller.state().story() {
//!     println!("{}", story);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod controller;
mod export;
mod form;
mod narration;
mod recording;
mod state;
mod transport;

pub use controller::{CELEBRATION_DURATION, PresentationController, STORY_TITLE, SubmitOutcome};
pub use export::{ExportFormat, Exporter};
pub use form::JournalForm;
pub use narration::{
    DEFAULT_PREFERRED_VOICES, NarrationConfig, NarrationConfigBuilder, Narrator, select_voice,
};
pub use recording::Recorder;
pub use state::UiState;
pub use transport::HttpStoryTransport;
