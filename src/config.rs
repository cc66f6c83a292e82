use std::time::Duration;

/// Client configuration, loaded from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend origin, no trailing slash (e.g. "http://localhost:8000")
    pub backend_url: String,
    /// Timeout applied to every request so a hung call never leaves a view
    /// loading forever
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    /// MATINEE_BACKEND_URL and MATINEE_TIMEOUT_SECS are both optional.
    pub fn from_env() -> Self {
        let backend_url = std::env::var("MATINEE_BACKEND_URL")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "http://localhost:8000".to_string());

        let request_timeout = std::env::var("MATINEE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10));

        Self {
            backend_url,
            request_timeout,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}
