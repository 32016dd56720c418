//! Client-side presentation errors.

/// Failure conditions surfaced to the person using the journal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PresentationErrorKind {
    /// The story endpoint could not be reached or answered with an error
    #[display("Story request failed: {}", _0)]
    ClientTransportFailure(String),

    /// Microphone permission denied or device unavailable
    #[display("Microphone unavailable: {}", _0)]
    DeviceAccessFailure(String),

    /// Rasterizing or exporting the story failed
    #[display("Render failed: {}", _0)]
    RenderFailure(String),

    /// The action requires a generated story
    #[display("No story has been generated yet")]
    NoStory,

    /// The host did not provide the collaborator for this action
    #[display("{} is not available", _0)]
    Unavailable(String),

    /// A journal week index that does not exist
    #[display("No journal week at index {}", _0)]
    UnknownWeek(usize),
}

impl PresentationErrorKind {
    /// Text shown in the user-facing alert for this failure.
    pub fn alert_message(&self) -> &'static str {
        match self {
            PresentationErrorKind::ClientTransportFailure(_) => {
                "Failed to generate story. Please try again."
            }
            PresentationErrorKind::DeviceAccessFailure(_) => "Could not access the microphone.",
            PresentationErrorKind::RenderFailure(_) => "Failed to export the story.",
            PresentationErrorKind::NoStory => "Generate a story first.",
            PresentationErrorKind::Unavailable(_) => "This feature is not available here.",
            PresentationErrorKind::UnknownWeek(_) => "That journal week does not exist.",
        }
    }
}

/// Presentation error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Presentation Error: {} at line {} in {}", kind, line, file)]
pub struct PresentationError {
    /// The error kind
    pub kind: PresentationErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl PresentationError {
    /// Create a new PresentationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PresentationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PresentationErrorKind {
        &self.kind
    }
}

/// Result type for presentation operations.
pub type PresentationResult<T> = Result<T, PresentationError>;
