//! Tests for provider registries
//!
//! Uses `extern crate nvdb_providers` (see `unit.rs`) to force linkme
//! registration of real providers, then wires them into the use cases.

use nvdb_application::ports::registry::*;
use nvdb_application::ports::services::{
    CompareQuery, EmbeddingServiceInterface, SimilarityServiceInterface,
};
use nvdb_application::use_cases::{EmbeddingServiceImpl, SimilarityServiceImpl};

#[test]
fn test_list_providers_includes_null_provider() {
    let providers = list_embedding_providers();
    assert!(
        providers.iter().any(|(name, _)| *name == "null"),
        "Null provider should be registered. Available: {providers:?}"
    );
}

#[test]
fn test_repository_config_builder() {
    let config = NewsRepositoryConfig::new("postgres")
        .with_url("postgres://localhost/news")
        .with_max_connections(8)
        .with_connection_timeout_secs(3);

    assert_eq!(config.provider, "postgres");
    assert_eq!(config.url.as_deref(), Some("postgres://localhost/news"));
    assert_eq!(config.max_connections, Some(8));
    assert_eq!(config.connection_timeout_secs, Some(3));
    assert!(!format!("{config:?}").contains("localhost"));
}

#[test]
fn test_unknown_repository_lists_available() {
    let err = resolve_news_repository(&NewsRepositoryConfig::new("sqlite"))
        .err()
        .unwrap();
    assert!(err.contains("sqlite"));
    assert!(err.contains("memory"));
}

#[tokio::test]
async fn test_resolved_providers_drive_use_cases() {
    let provider =
        resolve_embedding_provider(&EmbeddingProviderConfig::new("null").with_dimensions(8))
            .unwrap();
    let repository = resolve_news_repository(&NewsRepositoryConfig::new("memory")).unwrap();

    let embedding = EmbeddingServiceImpl::new(provider.clone(), repository.clone())
        .embed_text("hello")
        .await
        .unwrap();
    let vector = embedding.vector.to_json().unwrap();

    let outcome = SimilarityServiceImpl::new(provider, repository)
        .compare(&CompareQuery::from_vector(vector))
        .await
        .unwrap();

    assert_eq!(embedding.dimensions(), 8);
    assert_eq!(outcome.total_compared, 0);
}
