//! Outbound call to the generation endpoint.
//!
//! One POST per request, bounded by a fixed timeout, never retried. Every
//! failure is mapped onto a [`GenerateError`] variant:
//!
//! - non-2xx status: [`GenerateError::HttpStatus`], with the reason phrase and
//!   whatever body text could be read
//! - connect, DNS, or timeout failures: [`GenerateError::Network`]
//! - a 2xx body that is not the expected JSON: [`GenerateError::Decode`]
//! - JSON without a usable `generated_text`: [`GenerateError::MissingContent`]
//! - anything else reqwest reports: [`GenerateError::Request`]

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

use crate::error::{GenerateError, NO_ERROR_CONTENT};
use crate::payload::{GenerationRequest, GenerationResponse};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for a single statically configured generation endpoint.
///
/// Holds no mutable state; cloning shares the underlying connection handle.
#[derive(Debug, Clone)]
pub struct GenerateClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GenerateClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, GenerateError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerateError::Request(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `request` and return the trimmed generated text.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerateError> {
        let body = serde_json::to_vec(request)?;

        info!(
            endpoint = %self.endpoint,
            prompt_len = request.prompt.len(),
            "calling generation API"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| NO_ERROR_CONTENT.to_string());
            // Standard phrase for the code; a custom phrase sent by the
            // server is not reported.
            return Err(GenerateError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(classify_send_error)?;
        let parsed: GenerationResponse =
            serde_json::from_slice(&bytes).map_err(|e| GenerateError::Decode(e.to_string()))?;

        debug!(
            status = status.as_u16(),
            response = %String::from_utf8_lossy(&bytes),
            "generation API response"
        );

        parsed.into_text()
    }
}

fn classify_send_error(e: reqwest::Error) -> GenerateError {
    let detail = error_chain(&e);
    if e.is_timeout() || e.is_connect() || e.is_request() || e.is_body() {
        GenerateError::Network(detail)
    } else {
        GenerateError::Request(detail)
    }
}

/// reqwest's top-level message omits the cause ("connection refused",
/// "operation timed out"), so append the source chain.
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
