//! Tests for provider self-registration
//!
//! Linking `nvdb_providers` fills the registries declared in
//! `nvdb-application`; these tests resolve real entries by name.

use nvdb_application::ports::registry::{
    EmbeddingProviderConfig, NewsRepositoryConfig, list_embedding_providers,
    list_news_repositories, resolve_embedding_provider, resolve_news_repository,
};

#[test]
fn test_embedding_providers_are_registered() {
    let names: Vec<_> = list_embedding_providers()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert!(names.contains(&"null"), "Available: {names:?}");
    assert!(names.contains(&"gemini"), "Available: {names:?}");
}

#[test]
fn test_news_repositories_are_registered() {
    let names: Vec<_> = list_news_repositories()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert!(names.contains(&"memory"), "Available: {names:?}");
    assert!(names.contains(&"postgres"), "Available: {names:?}");
}

#[test]
fn test_resolve_null_provider_with_dimensions() {
    let provider =
        resolve_embedding_provider(&EmbeddingProviderConfig::new("null").with_dimensions(32))
            .unwrap();
    assert_eq!(provider.provider_name(), "null");
    assert_eq!(provider.dimensions(), 32);
}

#[test]
fn test_resolve_gemini_requires_api_key() {
    let err = resolve_embedding_provider(&EmbeddingProviderConfig::new("gemini"))
        .err()
        .unwrap();
    assert!(err.contains("api_key"));

    let provider = resolve_embedding_provider(
        &EmbeddingProviderConfig::new("gemini").with_api_key("key"),
    )
    .unwrap();
    assert_eq!(provider.model(), "text-embedding-004");
}

#[test]
fn test_resolve_unknown_provider_lists_available() {
    let err = resolve_embedding_provider(&EmbeddingProviderConfig::new("nope"))
        .err()
        .unwrap();
    assert!(err.contains("Unknown embedding provider 'nope'"));
    assert!(err.contains("null"));
}

#[test]
fn test_resolve_memory_repository() {
    let repo = resolve_news_repository(&NewsRepositoryConfig::new("memory")).unwrap();
    assert_eq!(repo.provider_name(), "memory");
}

#[test]
fn test_resolve_postgres_requires_url() {
    let err = resolve_news_repository(&NewsRepositoryConfig::new("postgres"))
        .err()
        .unwrap();
    assert!(err.contains("url"));
}
