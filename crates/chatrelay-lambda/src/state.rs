use chatrelay_generate::client::GenerateClient;

use crate::config::Config;

/// Read-only state built at cold start and borrowed by every invocation.
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: GenerateClient,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, chatrelay_generate::error::GenerateError> {
        let client = GenerateClient::new(config.api_url.clone(), config.timeout)?;
        Ok(Self { client })
    }
}
