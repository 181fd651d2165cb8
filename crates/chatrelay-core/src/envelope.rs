use serde::{Deserialize, Serialize};

use crate::models::chat::ChatMessage;

/// Uniform success/failure body returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_history: Option<Vec<ChatMessage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    pub fn success(response: String, conversation_history: Vec<ChatMessage>) -> Self {
        Self {
            success: true,
            response: Some(response),
            conversation_history: Some(conversation_history),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            response: None,
            conversation_history: None,
            error: Some(error.into()),
        }
    }
}
