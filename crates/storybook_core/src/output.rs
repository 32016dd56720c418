//! Output types from provider responses.

use serde::{Deserialize, Serialize};

/// Output produced by the generation provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output (one completion).
    Text(String),
}

impl Output {
    /// Text carried by this output, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Output::Text(text) => Some(text.as_str()),
        }
    }
}
