//! News Repository Registry
//!
//! Storage backends register themselves the same way embedding providers
//! do and are selected by name from configuration.

use std::sync::Arc;

use nvdb_domain::repositories::NewsRepository;

/// Configuration for news repository creation
#[derive(Clone, Default)]
pub struct NewsRepositoryConfig {
    /// Backend name (e.g., "postgres", "memory")
    pub provider: String,
    /// Connection URL
    pub url: Option<String>,
    /// Maximum pooled connections
    pub max_connections: Option<u32>,
    /// Seconds to wait for a pooled connection
    pub connection_timeout_secs: Option<u64>,
}

impl std::fmt::Debug for NewsRepositoryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsRepositoryConfig")
            .field("provider", &self.provider)
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("max_connections", &self.max_connections)
            .field("connection_timeout_secs", &self.connection_timeout_secs)
            .finish()
    }
}

impl NewsRepositoryConfig {
    /// Create a new config with the given backend name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the connection URL
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the pool size
    #[must_use]
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = Some(max_connections);
        self
    }

    /// Set the connection timeout
    #[must_use]
    pub fn with_connection_timeout_secs(mut self, secs: u64) -> Self {
        self.connection_timeout_secs = Some(secs);
        self
    }
}

/// Registry entry for news repositories
pub struct NewsRepositoryEntry {
    /// Unique backend name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create repository instance
    pub factory: fn(&NewsRepositoryConfig) -> Result<Arc<dyn NewsRepository>, String>,
}

#[linkme::distributed_slice]
pub static NEWS_REPOSITORIES: [NewsRepositoryEntry] = [..];

/// Resolve news repository by name from registry
pub fn resolve_news_repository(
    config: &NewsRepositoryConfig,
) -> Result<Arc<dyn NewsRepository>, String> {
    let provider_name = &config.provider;

    for entry in NEWS_REPOSITORIES {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = NEWS_REPOSITORIES.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown news repository '{provider_name}'. Available repositories: {available:?}"
    ))
}

/// List all registered news repositories as (name, description) tuples
pub fn list_news_repositories() -> Vec<(&'static str, &'static str)> {
    NEWS_REPOSITORIES
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
