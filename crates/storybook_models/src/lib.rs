//! Text-generation provider integrations for Storybook.
//!
//! The story endpoint talks to its provider through the
//! [`StoryDriver`](storybook_interface::StoryDriver) trait. This crate supplies
//! the production implementation: a client for OpenAI-style chat-completion
//! APIs.
//!
//! # Example
//!
//! ```no_run
//! use storybook_core::{STORY_MODEL, story_generate_request};
//! use storybook_interface::StoryDriver;
//! use storybook_models::{OpenAIClient, OpenAIConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAIClient::new(OpenAIConfig::from_env()?);
//! let request = story_generate_request(&["Learned to swim".to_string()], STORY_MODEL);
//! let response = client.generate(&request).await?;
//! println!("{:?}", response.first_text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod metrics;
mod openai;

pub use metrics::{CallObserver, CallRecord, LlmMetrics, TokenUsage, classify_error};
pub use openai::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse, ChatMessage,
    Choice, ChoiceMessage, OpenAIClient, OpenAIConfig, Usage, from_chat_response,
    to_chat_request,
};
