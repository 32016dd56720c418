//! Error types for the Storybook service.
//!
//! This crate provides the foundation error types used throughout the Storybook workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use storybook_error::{StorybookResult, HttpError};
//!
//! fn fetch_data() -> StorybookResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod http;
mod presentation;
mod provider;
mod story;

pub use config::ConfigError;
pub use error::{StorybookError, StorybookErrorKind, StorybookResult};
pub use http::HttpError;
pub use presentation::{PresentationError, PresentationErrorKind, PresentationResult};
pub use provider::{ProviderError, ProviderErrorKind, ProviderResult};
pub use story::{StoryError, StoryErrorKind};
