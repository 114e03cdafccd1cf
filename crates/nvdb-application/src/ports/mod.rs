//! Port Interfaces
//!
//! Boundary contracts between the application and external layers.
//!
//! ## Organization
//!
//! - **providers/** - External service providers (embeddings)
//! - **registry/** - Auto-registration system for plugin providers
//! - **services.rs** - Application service interfaces and their result types

/// External service provider ports
pub mod providers;
/// Provider registry for dynamic provider discovery
pub mod registry;
/// Application service interfaces
pub mod services;

pub use providers::EmbeddingProvider;
pub use registry::{
    EmbeddingProviderConfig, EmbeddingProviderEntry, NewsRepositoryConfig, NewsRepositoryEntry,
    list_embedding_providers, list_news_repositories, resolve_embedding_provider,
    resolve_news_repository,
};
pub use services::{
    BatchEmbeddingReport, CompareOutcome, CompareQuery, EmbedRecordOutcome,
    EmbeddingServiceInterface, FailedItem, SimilarityServiceInterface,
};
