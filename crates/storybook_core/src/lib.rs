//! Core data types for the Storybook service.
//!
//! This crate provides the types shared by the story endpoint, the provider
//! client and the presentation controller: journal normalization, the wire
//! contract of `POST /api/generate-story`, prompt construction, and the
//! provider-neutral generation request/response.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod journal;
mod message;
mod output;
mod prompt;
mod request;
mod role;
mod story;

pub use journal::{EntryList, JournalText, normalize};
pub use message::{Message, MessageBuilder};
pub use output::Output;
pub use prompt::{STORY_MAX_TOKENS, STORY_MODEL, story_generate_request, story_prompt};
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateRequestBuilderError, GenerateResponse,
    GenerateResponseBuilder, GenerateResponseBuilderError,
};
pub use role::Role;
pub use story::{GENERATE_STORY_PATH, StoryRequest, StoryResponse};
