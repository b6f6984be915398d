//! Client configuration

use std::time::Duration;

/// Configuration for [`ApiClient`](crate::ApiClient)
///
/// The base endpoint and timeout are explicit values handed to the client at
/// construction; nothing is read from ambient globals.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend (e.g. "https://api.immob.example")
    pub base_url: String,
    /// Bounded timeout applied to every request
    pub timeout: Duration,
    /// Optional User-Agent header value
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: None,
        }
    }
}

impl ApiConfig {
    /// Create a configuration for the given base URL with default timeout
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }

    /// Base URL without a trailing slash, ready for path concatenation
    #[must_use]
    pub(crate) fn root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
