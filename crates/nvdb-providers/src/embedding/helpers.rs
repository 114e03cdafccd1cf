//! Common helpers for embedding providers

/// Constructor patterns shared by API-backed providers
pub mod constructor {
    use std::time::Duration;

    use crate::constants::DEFAULT_EMBEDDING_TIMEOUT;

    /// Trim surrounding whitespace from an API key
    pub fn validate_api_key(api_key: &str) -> String {
        api_key.trim().to_string()
    }

    /// Trim a base URL and drop any trailing slash
    pub fn validate_url(url: Option<String>) -> Option<String> {
        url.map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
    }

    /// Timeout from optional seconds, falling back to the default
    pub fn timeout_or_default(secs: Option<u64>) -> Duration {
        secs.map_or(DEFAULT_EMBEDDING_TIMEOUT, Duration::from_secs)
    }

    /// Get effective URL with fallback to default
    pub fn get_effective_url(provided_url: Option<&str>, default_url: &str) -> String {
        provided_url.map_or_else(|| default_url.to_string(), |url| url.trim().to_string())
    }
}
