//! Wire contract of the story endpoint.

use crate::EntryList;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use storybook_error::{StoryError, StoryErrorKind};

/// Path of the story generation endpoint.
pub const GENERATE_STORY_PATH: &str = "/api/generate-story";

/// Body of `POST /api/generate-story`.
///
/// # Examples
///
/// ```
/// use storybook_core::StoryRequest;
///
/// let request = StoryRequest::from_json(br#"{"entries": ["Built a fort"]}"#).unwrap();
/// assert_eq!(request.entries(), &vec!["Built a fort".to_string()]);
///
/// assert!(StoryRequest::from_json(br#"{"entries": "Built a fort"}"#).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StoryRequest {
    /// Normalized journal entries, in order
    entries: EntryList,
}

impl StoryRequest {
    /// Wrap an entry list for sending.
    pub fn new(entries: EntryList) -> Self {
        Self { entries }
    }

    /// Take the entries out of the request.
    pub fn into_entries(self) -> EntryList {
        self.entries
    }

    /// Parse and validate a raw request body.
    ///
    /// The body must be a JSON object whose `entries` field is an array. An
    /// empty array is valid. Elements are turned into text the way a
    /// JavaScript `Array.join` would: strings as-is, `null` as an empty
    /// string, numbers and booleans in their plain form, nested arrays
    /// joined with commas and objects as `[object Object]`.
    ///
    /// # Errors
    ///
    /// Returns [`StoryErrorKind::BadRequest`] when the body is not JSON, has
    /// no `entries` field, or `entries` is not an array.
    pub fn from_json(body: &[u8]) -> Result<Self, StoryError> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            StoryError::new(StoryErrorKind::BadRequest(format!(
                "body is not valid JSON: {}",
                e
            )))
        })?;

        let entries = value
            .get("entries")
            .ok_or_else(|| StoryError::new(StoryErrorKind::BadRequest("entries missing".into())))?
            .as_array()
            .ok_or_else(|| {
                StoryError::new(StoryErrorKind::BadRequest("entries is not an array".into()))
            })?;

        Ok(Self {
            entries: entries.iter().map(entry_text).collect(),
        })
    }
}

fn entry_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        // Whole floats print without a fraction: 2.0 is "2".
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Value::Array(items) => items.iter().map(entry_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Response body of the story endpoint.
///
/// Serialized without a tag, so the wire shape is either `{"story": ...}`
/// or `{"error": ...}`.
///
/// # Examples
///
/// ```
/// use storybook_core::StoryResponse;
///
/// let body = serde_json::to_string(&StoryResponse::success("Hello.")).unwrap();
/// assert_eq!(body, r#"{"story":"Hello."}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoryResponse {
    /// Generated story text
    Story {
        /// The story paragraph
        story: String,
    },
    /// Public error message
    Error {
        /// Message safe to show the caller
        error: String,
    },
}

impl StoryResponse {
    /// A successful response carrying the story.
    pub fn success(story: impl Into<String>) -> Self {
        StoryResponse::Story {
            story: story.into(),
        }
    }

    /// An error response carrying a public message.
    pub fn failure(error: impl Into<String>) -> Self {
        StoryResponse::Error {
            error: error.into(),
        }
    }

    /// The story text, if this is a success.
    pub fn into_story(self) -> Option<String> {
        match self {
            StoryResponse::Story { story } => Some(story),
            StoryResponse::Error { .. } => None,
        }
    }
}
