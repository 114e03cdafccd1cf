//! Provider selection types
//!
//! Both sections name a registered provider and carry the options it needs.
//! Secrets are redacted from `Debug` output.

use std::fmt;

use nvdb_application::ports::registry::{EmbeddingProviderConfig, NewsRepositoryConfig};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DATABASE_PROVIDER, DEFAULT_DB_CONNECTION_TIMEOUT_SECS, DEFAULT_DB_MAX_CONNECTIONS,
    DEFAULT_EMBEDDING_PROVIDER, DEFAULT_EMBEDDING_TIMEOUT_SECS,
};

/// Embedding provider configuration
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Registered provider name (`gemini`, `null`)
    pub provider: String,
    /// Model identifier; provider default when unset
    pub model: Option<String>,
    /// API key
    pub api_key: Option<String>,
    /// API base URL override
    pub base_url: Option<String>,
    /// Output dimensions, for providers that support it
    pub dimensions: Option<usize>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: None,
            api_key: None,
            base_url: None,
            dimensions: None,
            timeout_secs: DEFAULT_EMBEDDING_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for EmbeddingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddingConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("dimensions", &self.dimensions)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl EmbeddingConfig {
    /// Whether a non-blank API key is set
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Registry configuration for this section
    pub fn to_provider_config(&self) -> EmbeddingProviderConfig {
        let mut config =
            EmbeddingProviderConfig::new(&self.provider).with_timeout_secs(self.timeout_secs);
        config.model.clone_from(&self.model);
        config.api_key.clone_from(&self.api_key);
        config.base_url.clone_from(&self.base_url);
        config.dimensions = self.dimensions;
        config
    }
}

/// News storage configuration
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Registered repository name (`postgres`, `memory`)
    pub provider: String,
    /// Connection URL
    pub url: Option<String>,
    /// Connection pool size
    pub max_connections: u32,
    /// Pool checkout timeout in seconds
    pub connection_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_DATABASE_PROVIDER.to_string(),
            url: None,
            max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            connection_timeout_secs: DEFAULT_DB_CONNECTION_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("provider", &self.provider)
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("max_connections", &self.max_connections)
            .field("connection_timeout_secs", &self.connection_timeout_secs)
            .finish()
    }
}

impl DatabaseConfig {
    /// Whether a non-blank connection URL is set
    pub fn is_configured(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.trim().is_empty())
    }

    /// Registry configuration for this section
    pub fn to_repository_config(&self) -> NewsRepositoryConfig {
        let mut config = NewsRepositoryConfig::new(&self.provider)
            .with_max_connections(self.max_connections)
            .with_connection_timeout_secs(self.connection_timeout_secs);
        config.url.clone_from(&self.url);
        config
    }
}
