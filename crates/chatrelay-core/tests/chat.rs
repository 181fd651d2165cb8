use chatrelay_core::envelope::Envelope;
use chatrelay_core::models::chat::{ChatMessage, ChatRole, Conversation};
use serde_json::json;

#[test]
fn known_roles_deserialize_to_variants() {
    let msg: ChatMessage =
        serde_json::from_value(json!({"role": "assistant", "content": "ok"})).unwrap();
    assert_eq!(msg.role, ChatRole::Assistant);

    let msg: ChatMessage =
        serde_json::from_value(json!({"role": "user", "content": "ok"})).unwrap();
    assert_eq!(msg.role, ChatRole::User);
}

#[test]
fn unknown_role_round_trips_verbatim() {
    let raw = json!({"role": "system", "content": "rules"});
    let msg: ChatMessage = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(msg.role, ChatRole::Other("system".to_string()));
    assert_eq!(serde_json::to_value(&msg).unwrap(), raw);
}

#[test]
fn conversation_copy_leaves_history_untouched() {
    let history = vec![ChatMessage::user("first"), ChatMessage::assistant("reply")];

    let mut conversation = Conversation::from_history(&history);
    conversation.push(ChatMessage::user("second"));

    assert_eq!(history.len(), 2);
    assert_eq!(conversation.messages().len(), 3);
    assert_eq!(conversation.messages()[2], ChatMessage::user("second"));
}

#[test]
fn extra_fields_round_trip() {
    let raw = json!({"role": "user", "content": "a", "id": "t1", "meta": {"n": 1}});
    let msg: ChatMessage = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(msg.extra.get("id"), Some(&json!("t1")));
    assert_eq!(serde_json::to_value(&msg).unwrap(), raw);
}

#[test]
fn other_role_may_omit_content() {
    let raw = json!({"role": "system"});
    let msg: ChatMessage = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(msg.content, None);
    assert!(!msg.is_conversational());
    assert_eq!(serde_json::to_value(&msg).unwrap(), raw);
}

#[test]
fn conversation_serializes_as_plain_array() {
    let conversation = Conversation::from_history(&[ChatMessage::user("hi")]);
    assert_eq!(
        serde_json::to_value(&conversation).unwrap(),
        json!([{"role": "user", "content": "hi"}])
    );
}

#[test]
fn success_envelope_omits_error() {
    let envelope = Envelope::success("hello".to_string(), vec![ChatMessage::assistant("hello")]);
    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({
            "success": true,
            "response": "hello",
            "conversationHistory": [{"role": "assistant", "content": "hello"}],
        })
    );
}

#[test]
fn failure_envelope_carries_only_error() {
    let envelope = Envelope::failure("boom");
    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({"success": false, "error": "boom"})
    );
}
