//! Error types for the text-generation provider.

/// Error kinds for provider calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProviderErrorKind {
    /// Transport-level failure reaching the provider
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// Provider answered with a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code returned by the provider
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// Response body did not match the expected shape
    #[display("Failed to deserialize response: {}", _0)]
    Deserialization(String),

    /// Provider returned no usable completion text
    #[display("Provider returned no completion")]
    EmptyCompletion,

    /// Request could not be assembled
    #[display("Builder error: {}", _0)]
    Builder(String),

    /// Provider credentials or endpoint missing
    #[display("Configuration error: {}", _0)]
    Configuration(String),
}

/// Provider error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The error kind
    pub kind: ProviderErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ProviderErrorKind {
        &self.kind
    }
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
