//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for plugin providers.
//! Uses the `linkme` crate for compile-time registration of providers
//! that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]  │
//! │                        static ENTRY: ProviderEntry = ...        │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PROVIDERS: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Resolver queries:  PROVIDERS.iter()                         │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = gemini" → GeminiProvider     │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in nvdb-providers)
//!
//! ```ignore
//! use nvdb_application::ports::registry::{EmbeddingProviderEntry, EMBEDDING_PROVIDERS};
//!
//! #[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
//! static GEMINI_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
//!     name: "gemini",
//!     description: "Google Gemini embedding provider",
//!     factory: gemini_factory,
//! };
//! ```
//!
//! ### Resolving a Provider (in nvdb-infrastructure)
//!
//! ```ignore
//! use nvdb_application::ports::registry::resolve_news_repository;
//!
//! let config = NewsRepositoryConfig::new("postgres").with_url(url);
//! let repository = resolve_news_repository(&config)?;
//! ```

pub mod embedding;
pub mod news_repository;

pub use embedding::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry, list_embedding_providers,
    resolve_embedding_provider,
};
pub use news_repository::{
    NEWS_REPOSITORIES, NewsRepositoryConfig, NewsRepositoryEntry, list_news_repositories,
    resolve_news_repository,
};
