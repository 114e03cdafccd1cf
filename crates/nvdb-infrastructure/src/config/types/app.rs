//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{DatabaseConfig, EmbeddingConfig, LoggingConfig, ServerConfig};
use crate::constants::DEFAULT_ENVIRONMENT;

/// Root configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Deployment environment name (`development`, `production`, ...)
    pub environment: String,
    /// HTTP server
    pub server: ServerConfig,
    /// Logging
    pub logging: LoggingConfig,
    /// Embedding provider
    pub embedding: EmbeddingConfig,
    /// News storage
    pub database: DatabaseConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            embedding: EmbeddingConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}
