use chatrelay_core::envelope::Envelope;
use chatrelay_generate::error::GenerateError;

use crate::event::ProxyResponse;

pub const FAILURE_STATUS: u16 = 500;

/// Every way an invocation can fail. All of them become a 500 envelope.
#[derive(Debug)]
pub enum ApiError {
    /// Event or body did not match the expected schema.
    Validation(String),
    /// The outbound generation call failed.
    Generate(GenerateError),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation",
            ApiError::Generate(GenerateError::HttpStatus { .. }) => "http_status",
            ApiError::Generate(GenerateError::Network(_)) => "network",
            ApiError::Generate(GenerateError::Decode(_)) => "decode",
            ApiError::Generate(GenerateError::MissingContent) => "missing_content",
            ApiError::Generate(GenerateError::Request(_) | GenerateError::Serialization(_)) => {
                "other"
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::Validation(msg) => format!("invalid request: {msg}"),
            ApiError::Generate(e) => e.to_string(),
        }
    }

    pub fn into_response(self) -> ProxyResponse {
        let message = self.message();
        tracing::error!(kind = self.kind(), "request failed: {message}");
        ProxyResponse::json(FAILURE_STATUS, &Envelope::failure(message))
    }
}

impl From<GenerateError> for ApiError {
    fn from(e: GenerateError) -> Self {
        ApiError::Generate(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Validation(e.to_string())
    }
}
