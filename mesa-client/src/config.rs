//! Client configuration

/// Base URL used when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Environment variable holding the API base URL
pub const ENV_BASE_URL: &str = "MESA_API_BASE_URL";

/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "MESA_API_TIMEOUT_SECS";

/// Client configuration for connecting to the reservation backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL without trailing slash (e.g., "http://127.0.0.1:8000/api")
    pub base_url: String,

    /// Request timeout in seconds. `None` leaves requests unbounded.
    pub timeout: Option<u64>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    /// Read configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = std::env::var(ENV_TIMEOUT_SECS)
            .ok()
            .and_then(|t| t.parse().ok());

        Self {
            timeout,
            ..Self::new(base_url)
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Full URL of a resource collection
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
