//! Provider resolvers
//!
//! Map configuration sections onto registry lookups, turning registry
//! failures into configuration errors.

use std::sync::Arc;

use nvdb_application::ports::registry::{resolve_embedding_provider, resolve_news_repository};
use nvdb_application::ports::EmbeddingProvider;
use nvdb_domain::error::{Error, Result};
use nvdb_domain::repositories::NewsRepository;

use crate::config::{DatabaseConfig, EmbeddingConfig};

/// Create the configured embedding provider
pub fn resolve_embedding(config: &EmbeddingConfig) -> Result<Arc<dyn EmbeddingProvider>> {
    resolve_embedding_provider(&config.to_provider_config()).map_err(Error::configuration)
}

/// Create the configured news repository
pub fn resolve_repository(config: &DatabaseConfig) -> Result<Arc<dyn NewsRepository>> {
    resolve_news_repository(&config.to_repository_config()).map_err(Error::configuration)
}
