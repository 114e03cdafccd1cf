//! Composition root
//!
//! ```text
//! AppConfig → resolvers → providers → use cases → AppContext
//!                ↑
//!             linkme
//!            registry
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let outcome = context.similarity_service().compare(&query).await?;
//! ```

use std::sync::Arc;

use nvdb_application::ports::EmbeddingProvider;
use nvdb_application::ports::services::{EmbeddingServiceInterface, SimilarityServiceInterface};
use nvdb_application::use_cases::{EmbeddingServiceImpl, SimilarityServiceImpl};
use nvdb_domain::error::Result;
use nvdb_domain::repositories::NewsRepository;
use tracing::info;

use super::resolvers::{resolve_embedding, resolve_repository};
use crate::config::AppConfig;

/// Application context holding the wired services
#[derive(Clone)]
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    embedding_provider: Arc<dyn EmbeddingProvider>,
    repository: Arc<dyn NewsRepository>,
    similarity_service: Arc<dyn SimilarityServiceInterface>,
    embedding_service: Arc<dyn EmbeddingServiceInterface>,
}

impl AppContext {
    /// Wire services around already constructed providers
    pub fn from_parts(
        config: AppConfig,
        embedding_provider: Arc<dyn EmbeddingProvider>,
        repository: Arc<dyn NewsRepository>,
    ) -> Self {
        let similarity_service: Arc<dyn SimilarityServiceInterface> = Arc::new(
            SimilarityServiceImpl::new(embedding_provider.clone(), repository.clone()),
        );
        let embedding_service: Arc<dyn EmbeddingServiceInterface> = Arc::new(
            EmbeddingServiceImpl::new(embedding_provider.clone(), repository.clone()),
        );

        Self {
            config: Arc::new(config),
            embedding_provider,
            repository,
            similarity_service,
            embedding_service,
        }
    }

    /// Get the embedding provider
    pub fn embedding_provider(&self) -> Arc<dyn EmbeddingProvider> {
        self.embedding_provider.clone()
    }

    /// Get the news repository
    pub fn repository(&self) -> Arc<dyn NewsRepository> {
        self.repository.clone()
    }

    /// Get the similarity query orchestrator
    pub fn similarity_service(&self) -> Arc<dyn SimilarityServiceInterface> {
        self.similarity_service.clone()
    }

    /// Get the embedding service
    pub fn embedding_service(&self) -> Arc<dyn EmbeddingServiceInterface> {
        self.embedding_service.clone()
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("embedding_provider", &self.embedding_provider.provider_name())
            .field("repository", &self.repository.provider_name())
            .finish_non_exhaustive()
    }
}

/// Resolve the configured providers and wire the use cases
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let embedding_provider = resolve_embedding(&config.embedding)?;
    let repository = resolve_repository(&config.database)?;

    info!(
        environment = %config.environment,
        embedding_provider = embedding_provider.provider_name(),
        model = embedding_provider.model(),
        repository = repository.provider_name(),
        "Application context initialized"
    );

    Ok(AppContext::from_parts(config, embedding_provider, repository))
}
