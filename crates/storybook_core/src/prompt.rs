//! Prompt construction for story generation.

use crate::{GenerateRequest, Message};

/// Model requested from the provider.
pub const STORY_MODEL: &str = "gpt-4";

/// Output ceiling for a story completion.
pub const STORY_MAX_TOKENS: u32 = 300;

const PROMPT_PREAMBLE: &str =
    "Turn these weekly journal entries into a short, supportive pediatric storybook paragraph:";
const PROMPT_CUE: &str = "Story:";

/// Build the single user prompt for a set of entries.
///
/// # Examples
///
/// ```
/// use storybook_core::story_prompt;
///
/// let prompt = story_prompt(&["Lost a tooth".to_string(), "Rode a bike".to_string()]);
/// assert!(prompt.ends_with("Lost a tooth\nRode a bike\n\nStory:"));
/// ```
pub fn story_prompt(entries: &[String]) -> String {
    format!("{PROMPT_PREAMBLE}\n\n{}\n\n{PROMPT_CUE}", entries.join("\n"))
}

/// Build the provider request for a set of entries.
///
/// One user-role message carrying [`story_prompt`], the given model and a
/// [`STORY_MAX_TOKENS`] ceiling.
pub fn story_generate_request(entries: &[String], model: &str) -> GenerateRequest {
    GenerateRequest {
        messages: vec![Message::user(story_prompt(entries))],
        max_tokens: Some(STORY_MAX_TOKENS),
        temperature: None,
        model: Some(model.to_string()),
    }
}
