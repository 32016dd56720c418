//! Request and response types for provider generation.

use crate::{Message, Output};
use serde::{Deserialize, Serialize};

/// Provider-neutral generation request.
///
/// # Examples
///
/// ```
/// use storybook_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::user("Hello!")])
///     .max_tokens(100u32)
///     .model("gpt-4".to_string())
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 1);
/// assert_eq!(*request.max_tokens(), Some(100));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    pub(crate) messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub(crate) max_tokens: Option<u32>,
    /// Sampling temperature
    pub(crate) temperature: Option<f32>,
    /// Model identifier to use
    pub(crate) model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The provider-neutral response.
///
/// Outputs keep the provider's order; the first one is the primary completion.
///
/// # Examples
///
/// ```
/// use storybook_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse::builder()
///     .outputs(vec![Output::Text("Once upon a time".to_string())])
///     .build()
///     .unwrap();
///
/// assert_eq!(response.first_text(), Some("Once upon a time"));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateResponse {
    /// The generated outputs from the model
    outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Creates a new response builder.
    pub fn builder() -> GenerateResponseBuilder {
        GenerateResponseBuilder::default()
    }

    /// Text of the first output, if the first output is text.
    pub fn first_text(&self) -> Option<&str> {
        self.outputs.first().and_then(Output::as_text)
    }
}
