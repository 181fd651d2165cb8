use chatrelay_core::models::chat::{ChatMessage, ChatRole};
use chatrelay_core::prompt::{render_prompt, ASSISTANT_LABEL, USER_LABEL};
use serde_json::Map;

#[test]
fn empty_history_renders_empty_prompt() {
    assert_eq!(render_prompt(&[]), "");
}

#[test]
fn turns_rendered_in_order_with_labels() {
    let messages = vec![ChatMessage::user("a"), ChatMessage::assistant("b")];

    let prompt = render_prompt(&messages);
    assert_eq!(prompt, format!("{USER_LABEL}: a\n{ASSISTANT_LABEL}: b\n"));

    let lines: Vec<&str> = prompt.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(USER_LABEL));
    assert!(lines[1].starts_with(ASSISTANT_LABEL));
    assert!(prompt.ends_with('\n'));
}

#[test]
fn rendering_is_idempotent() {
    let messages = vec![
        ChatMessage::user("hello"),
        ChatMessage::assistant("hi there"),
        ChatMessage::user("how are you?"),
    ];

    assert_eq!(render_prompt(&messages), render_prompt(&messages));
}

#[test]
fn unknown_roles_are_skipped() {
    let messages = vec![
        ChatMessage {
            role: ChatRole::Other("system".to_string()),
            content: Some("be terse".to_string()),
            extra: Map::new(),
        },
        ChatMessage::user("question"),
    ];

    let prompt = render_prompt(&messages);
    assert_eq!(prompt, format!("{USER_LABEL}: question\n"));
    assert!(!prompt.contains("be terse"));
}

#[test]
fn multiline_content_is_passed_through() {
    let messages = vec![ChatMessage::user("line one\nline two")];
    assert_eq!(
        render_prompt(&messages),
        format!("{USER_LABEL}: line one\nline two\n")
    );
}

#[test]
fn other_role_without_content_is_skipped() {
    let messages = vec![
        ChatMessage {
            role: ChatRole::Other("system".to_string()),
            content: None,
            extra: Map::new(),
        },
        ChatMessage::assistant("hi"),
    ];

    assert_eq!(render_prompt(&messages), format!("{ASSISTANT_LABEL}: hi\n"));
}
