//! Wire shapes of the generation endpoint.

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

pub const MAX_NEW_TOKENS: u32 = 512;
pub const TEMPERATURE: f64 = 0.7;
pub const TOP_P: f64 = 0.9;

/// Request body: a flattened prompt plus fixed sampling parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub max_new_tokens: u32,
    pub do_sample: bool,
    pub temperature: f64,
    pub top_p: f64,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_new_tokens: MAX_NEW_TOKENS,
            do_sample: true,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        }
    }
}

/// Response body. Anything besides `generated_text` is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub generated_text: Option<String>,
}

impl GenerationResponse {
    /// The generated text with surrounding whitespace trimmed.
    ///
    /// A missing or empty field is an error; whitespace-only text is not.
    pub fn into_text(self) -> Result<String, GenerateError> {
        match self.generated_text {
            Some(text) if !text.is_empty() => Ok(text.trim().to_string()),
            _ => Err(GenerateError::MissingContent),
        }
    }
}
