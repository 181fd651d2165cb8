use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single turn in a conversation.
///
/// `content` is optional on the wire so that turns with other roles pass
/// through without it; user and assistant turns are checked by the caller.
/// Any further keys are carried in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: Some(content.into()),
            extra: Map::new(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: Some(content.into()),
            extra: Map::new(),
        }
    }

    /// Whether the role is one that gets rendered into the prompt.
    pub fn is_conversational(&self) -> bool {
        matches!(self.role, ChatRole::User | ChatRole::Assistant)
    }
}

/// Role of a chat turn.
///
/// Roles other than `user` and `assistant` are kept verbatim so that a
/// caller's history round-trips unchanged, but they never reach the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
    #[serde(untagged)]
    Other(String),
}

/// An append-only sequence of turns.
///
/// Built from a copy of the caller's history; the original slice is never
/// touched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn from_history(history: &[ChatMessage]) -> Self {
        Self {
            messages: history.to_vec(),
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<ChatMessage> {
        self.messages
    }
}
