//! API Gateway proxy shapes, reduced to the fields this function reads and
//! writes.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use chatrelay_core::envelope::Envelope;
use chatrelay_core::models::chat::ChatMessage;

use crate::error::ApiError;

pub const CORS_ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
pub const CORS_ALLOW_METHODS: &str = "OPTIONS,POST";

/// Inbound proxy event. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyEvent {
    #[serde(default)]
    pub request_context: Option<RequestContext>,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestContext {
    #[serde(default)]
    pub authorizer: Option<Authorizer>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Authorizer {
    #[serde(default)]
    pub claims: Option<Claims>,
}

/// Identity claims attached by the upstream authorizer. Logged, never
/// verified here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(pub HashMap<String, Value>);

impl Claims {
    /// `email`, falling back to `cognito:username`.
    pub fn user_label(&self) -> Option<&str> {
        ["email", "cognito:username"]
            .iter()
            .filter_map(|key| self.0.get(*key).and_then(Value::as_str))
            .find(|value| !value.is_empty())
    }
}

/// Decoded request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Vec<ChatMessage>,
}

impl ProxyEvent {
    pub fn claims(&self) -> Option<&Claims> {
        self.request_context
            .as_ref()?
            .authorizer
            .as_ref()?
            .claims
            .as_ref()
    }

    /// Decode and validate the JSON body.
    ///
    /// User and assistant turns in the history must carry `content`.
    pub fn chat_request(&self) -> Result<ChatRequest, ApiError> {
        let body = self
            .body
            .as_deref()
            .ok_or_else(|| ApiError::Validation("missing request body".to_string()))?;
        let request: ChatRequest = serde_json::from_str(body)?;

        // Other roles may omit content; they never reach the prompt.
        if let Some(index) = request
            .conversation_history
            .iter()
            .position(|turn| turn.is_conversational() && turn.content.is_none())
        {
            return Err(ApiError::Validation(format!(
                "conversationHistory[{index}]: missing field `content`"
            )));
        }

        Ok(request)
    }
}

/// Outbound proxy response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ProxyResponse {
    pub fn json(status_code: u16, envelope: &Envelope) -> Self {
        let body = serde_json::to_string(envelope).unwrap_or_else(|e| {
            tracing::error!("failed to serialize envelope: {e}");
            r#"{"success":false,"error":"internal server error"}"#.to_string()
        });

        Self {
            status_code,
            headers: cors_headers(),
            body,
        }
    }

    pub fn envelope(&self) -> Result<Envelope, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

fn cors_headers() -> BTreeMap<String, String> {
    [
        ("Content-Type", "application/json"),
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Allow-Headers", CORS_ALLOW_HEADERS),
        ("Access-Control-Allow-Methods", CORS_ALLOW_METHODS),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
