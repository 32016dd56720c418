//! Primary UI state.

/// What the journal page is showing.
///
/// Narration, recording and celebration are tracked separately and never
/// change this state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Waiting for the story endpoint
    Submitting,
    /// A story was generated
    Result(String),
    /// The last submission failed; holds the alert text
    Error(String),
}

impl UiState {
    /// The generated story, if one is showing.
    pub fn story(&self) -> Option<&str> {
        match self {
            UiState::Result(story) => Some(story),
            _ => None,
        }
    }

    /// Whether a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, UiState::Submitting)
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    /// Label of the submit control.
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Generating Story..."
        } else {
            "Generate Story"
        }
    }
}
