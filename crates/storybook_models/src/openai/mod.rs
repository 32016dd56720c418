//! OpenAI-style chat-completion provider.

mod client;
mod convert;
mod dto;

pub use client::{OpenAIClient, OpenAIConfig};
pub use convert::{from_chat_response, to_chat_request};
pub use dto::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse, ChatMessage,
    Choice, ChoiceMessage, Usage,
};
