//! Errors raised by the story endpoint.
//!
//! Each kind maps to exactly one HTTP status and one public message. The
//! public message is the only text that crosses the wire; any detail carried
//! by the kind stays in the server logs.

/// Story endpoint failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StoryErrorKind {
    /// The endpoint was called with a method other than POST
    #[display("Method not allowed: {}", _0)]
    MethodNotAllowed(String),

    /// The payload lacks an `entries` array
    #[display("Bad request: {}", _0)]
    BadRequest(String),

    /// The generation provider failed
    #[display("Upstream failure: {}", _0)]
    UpstreamFailure(String),
}

impl StoryErrorKind {
    /// HTTP status code for this failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use storybook_error::StoryErrorKind;
    ///
    /// assert_eq!(StoryErrorKind::MethodNotAllowed("GET".into()).status_code(), 405);
    /// assert_eq!(StoryErrorKind::BadRequest("missing".into()).status_code(), 400);
    /// assert_eq!(StoryErrorKind::UpstreamFailure("boom".into()).status_code(), 500);
    /// ```
    pub fn status_code(&self) -> u16 {
        match self {
            StoryErrorKind::MethodNotAllowed(_) => 405,
            StoryErrorKind::BadRequest(_) => 400,
            StoryErrorKind::UpstreamFailure(_) => 500,
        }
    }

    /// Message returned to the caller in the `error` field.
    pub fn public_message(&self) -> &'static str {
        match self {
            StoryErrorKind::MethodNotAllowed(_) => "Only POST requests are allowed",
            StoryErrorKind::BadRequest(_) => "Missing or invalid 'entries'",
            StoryErrorKind::UpstreamFailure(_) => "Story generation failed",
        }
    }
}

/// Story endpoint error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Error: {} at line {} in {}", kind, line, file)]
pub struct StoryError {
    /// The error kind
    pub kind: StoryErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl StoryError {
    /// Create a new StoryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryErrorKind {
        &self.kind
    }
}
