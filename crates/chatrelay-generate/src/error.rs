use thiserror::Error;

/// Body text used when an error response body cannot be read.
pub const NO_ERROR_CONTENT: &str = "No additional error content.";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("API request failed with HTTP status {status} {reason}. Response: {body}")]
    HttpStatus {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("API request failed due to network error: {0}")]
    Network(String),

    #[error("Failed to decode API JSON response: {0}")]
    Decode(String),

    #[error("No generated text in API response")]
    MissingContent,

    #[error("An error occurred during API request: {0}")]
    Request(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
