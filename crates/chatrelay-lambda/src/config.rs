use std::env;
use std::time::Duration;

use chatrelay_generate::client::DEFAULT_TIMEOUT;

/// Endpoint of the generation API used when `CHATRELAY_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "https://04e1-35-204-236-223.ngrok-free.app/";

/// Settings read once at cold start.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or unparsable values fall
    /// back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("CHATRELAY_API_URL")
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let timeout = lookup("CHATRELAY_API_TIMEOUT_SECS")
            .and_then(|secs| secs.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self { api_url, timeout }
    }
}
