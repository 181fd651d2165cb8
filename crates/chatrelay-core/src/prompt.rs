//! Flattening a conversation into the single prompt string the generation
//! endpoint expects.
//!
//! Each turn becomes one line, `"<label>: <content>\n"`, in sequence order.
//! Turns whose role is neither user nor assistant are skipped.

use crate::models::chat::{ChatMessage, ChatRole};

pub const USER_LABEL: &str = "ユーザー";
pub const ASSISTANT_LABEL: &str = "アシスタント";

/// Render a turn sequence into a prompt string.
pub fn render_prompt(messages: &[ChatMessage]) -> String {
    let mut prompt = String::new();

    for msg in messages {
        let label = match &msg.role {
            ChatRole::User => USER_LABEL,
            ChatRole::Assistant => ASSISTANT_LABEL,
            ChatRole::Other(_) => continue,
        };
        prompt.push_str(label);
        prompt.push_str(": ");
        prompt.push_str(msg.content.as_deref().unwrap_or_default());
        prompt.push('\n');
    }

    prompt
}
