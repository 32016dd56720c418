//! Journal text and its normalized entry list.

use serde::{Deserialize, Serialize};

/// Ordered, trimmed, non-empty journal lines.
pub type EntryList = Vec<String>;

/// Split journal text into entries.
///
/// Lines are split on `\n`, trimmed, and dropped when nothing is left.
/// Order and duplicates are preserved; there is no failure case.
///
/// # Examples
///
/// ```
/// use storybook_core::normalize;
///
/// assert_eq!(normalize("a\n \nb\n"), vec!["a", "b"]);
/// assert!(normalize("").is_empty());
/// assert_eq!(normalize("x"), vec!["x"]);
/// ```
pub fn normalize(text: &str) -> EntryList {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Raw multi-line text as typed into the journal form.
///
/// # Examples
///
/// ```
/// use storybook_core::JournalText;
///
/// let text = JournalText::from("Went to the park\n\n  Fed the ducks  ");
/// assert_eq!(text.entries(), vec!["Went to the park", "Fed the ducks"]);
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct JournalText(String);

impl JournalText {
    /// Create journal text from anything string-like.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The raw text, exactly as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Replace the text with a new edit.
    pub fn replace(&mut self, text: impl Into<String>) {
        self.0 = text.into();
    }

    /// Whether the text has no non-blank lines.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Normalized entries for submission.
    pub fn entries(&self) -> EntryList {
        normalize(&self.0)
    }
}

impl From<&str> for JournalText {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}
