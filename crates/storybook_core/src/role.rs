//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Who authored a message sent to the provider.
///
/// Serializes in the lowercase form chat-completion APIs expect.
///
/// # Examples
///
/// ```
/// use storybook_core::Role;
///
/// assert_eq!(Role::User.as_str(), "user");
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System messages provide context and instructions
    System,
    /// User messages are from the human
    User,
    /// Assistant messages are from the AI
    Assistant,
}

impl Role {
    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}
