//! Static configuration for the upstream Dog API endpoint.

use std::time::Duration;

/// Public base URL of The Dog API.
pub const DEFAULT_BASE_URL: &str = "https://api.thedogapi.com/v1";

/// Header carrying the optional API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Fixed per-request timeout applied to every outbound call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the upstream API.
///
/// The API key is optional: The Dog API serves most endpoints without one,
/// at lower rate limits.
#[derive(Debug, Clone)]
pub struct DogApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl DogApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Default for DogApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, None)
    }
}
