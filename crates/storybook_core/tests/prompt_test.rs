use storybook_core::{Role, STORY_MAX_TOKENS, STORY_MODEL, story_generate_request, story_prompt};

#[test]
fn prompt_joins_entries_between_preamble_and_cue() {
    let entries = vec!["Went to the dentist".to_string(), "Was brave".to_string()];
    assert_eq!(
        story_prompt(&entries),
        "Turn these weekly journal entries into a short, supportive pediatric storybook paragraph:\n\nWent to the dentist\nWas brave\n\nStory:"
    );
}

#[test]
fn empty_entries_still_produce_a_prompt() {
    assert_eq!(
        story_prompt(&[]),
        "Turn these weekly journal entries into a short, supportive pediatric storybook paragraph:\n\n\n\nStory:"
    );
}

#[test]
fn generate_request_is_single_user_message_with_ceiling() {
    let entries = vec!["Planted seeds".to_string()];
    let request = story_generate_request(&entries, STORY_MODEL);

    assert_eq!(request.messages().len(), 1);
    let message = &request.messages()[0];
    assert_eq!(*message.role(), Role::User);
    assert_eq!(message.content(), &story_prompt(&entries));
    assert_eq!(*request.max_tokens(), Some(STORY_MAX_TOKENS));
    assert_eq!(STORY_MAX_TOKENS, 300);
    assert_eq!(request.model().as_deref(), Some("gpt-4"));
}
