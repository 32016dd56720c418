//! Conversion between storybook and chat-completions types.

use super::dto::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse, ChatMessage,
};
use storybook_core::{GenerateRequest, GenerateResponse, Output};
use storybook_error::{ProviderError, ProviderErrorKind};

/// Convert a GenerateRequest into a chat completion request.
///
/// The request's own model wins over `default_model`.
#[tracing::instrument(skip(request))]
pub fn to_chat_request(
    request: &GenerateRequest,
    default_model: &str,
) -> Result<ChatCompletionRequest, ProviderError> {
    let messages = request
        .messages()
        .iter()
        .map(|m| ChatMessage::new(m.role().as_str(), m.content().clone()))
        .collect::<Vec<_>>();

    let model = request
        .model()
        .clone()
        .unwrap_or_else(|| default_model.to_string());

    ChatCompletionRequestBuilder::default()
        .model(model)
        .messages(messages)
        .max_tokens(*request.max_tokens())
        .temperature(*request.temperature())
        .build()
        .map_err(|e| {
            ProviderError::new(ProviderErrorKind::Builder(format!(
                "Failed to build request: {}",
                e
            )))
        })
}

/// Convert a chat completion response into a GenerateResponse.
///
/// Only the first choice is used.
///
/// # Errors
///
/// [`ProviderErrorKind::EmptyCompletion`] when there are no choices or the
/// first choice carries no content.
#[tracing::instrument(skip(response))]
pub fn from_chat_response(
    response: &ChatCompletionResponse,
) -> Result<GenerateResponse, ProviderError> {
    let text = response
        .choices()
        .first()
        .and_then(|choice| choice.message().content().clone())
        .ok_or_else(|| ProviderError::new(ProviderErrorKind::EmptyCompletion))?;

    GenerateResponse::builder()
        .outputs(vec![Output::Text(text)])
        .build()
        .map_err(|e| ProviderError::new(ProviderErrorKind::Builder(e.to_string())))
}
