use storybook_core::{StoryRequest, StoryResponse};
use storybook_error::StoryErrorKind;

#[test]
fn accepts_array_of_strings() -> anyhow::Result<()> {
    let request = StoryRequest::from_json(br#"{"entries": ["Lost a tooth", "Got a sticker"]}"#)?;
    assert_eq!(request.entries(), &vec!["Lost a tooth", "Got a sticker"]);
    Ok(())
}

#[test]
fn accepts_empty_array() -> anyhow::Result<()> {
    let request = StoryRequest::from_json(br#"{"entries": []}"#)?;
    assert!(request.entries().is_empty());
    Ok(())
}

#[test]
fn non_string_elements_are_rendered() -> anyhow::Result<()> {
    let request = StoryRequest::from_json(br#"{"entries": ["a", 3, null, true]}"#)?;
    assert_eq!(request.into_entries(), vec!["a", "3", "", "true"]);
    Ok(())
}

#[test]
fn nested_values_follow_array_join_rules() -> anyhow::Result<()> {
    let request = StoryRequest::from_json(
        br#"{"entries": [["a", "b"], ["x", null, 1], {"k": 1}, 2.0, 1.5, []]}"#,
    )?;
    assert_eq!(
        request.into_entries(),
        vec!["a,b", "x,,1", "[object Object]", "2", "1.5", ""]
    );
    Ok(())
}

#[test]
fn missing_entries_is_bad_request() {
    let err = StoryRequest::from_json(br#"{"notes": []}"#).unwrap_err();
    assert!(matches!(err.kind(), StoryErrorKind::BadRequest(_)));
    assert_eq!(err.kind().status_code(), 400);
}

#[test]
fn wrong_type_is_bad_request() {
    for body in [
        br#"{"entries": "one line"}"#.as_slice(),
        br#"{"entries": {"a": 1}}"#.as_slice(),
        br#"{"entries": null}"#.as_slice(),
        br#"["a", "b"]"#.as_slice(),
    ] {
        let err = StoryRequest::from_json(body).unwrap_err();
        assert!(matches!(err.kind(), StoryErrorKind::BadRequest(_)));
    }
}

#[test]
fn unparseable_body_is_bad_request() {
    for body in [b"".as_slice(), b"entries=a".as_slice()] {
        let err = StoryRequest::from_json(body).unwrap_err();
        assert_eq!(err.kind().public_message(), "Missing or invalid 'entries'");
    }
}

#[test]
fn response_wire_shapes() -> anyhow::Result<()> {
    assert_eq!(
        serde_json::to_value(StoryResponse::failure("Story generation failed"))?,
        serde_json::json!({"error": "Story generation failed"})
    );

    let parsed: StoryResponse = serde_json::from_str(r#"{"story":"The end."}"#)?;
    assert_eq!(parsed.into_story().as_deref(), Some("The end."));

    let parsed: StoryResponse = serde_json::from_str(r#"{"error":"nope"}"#)?;
    assert_eq!(parsed.into_story(), None);
    Ok(())
}
