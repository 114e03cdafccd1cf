//! # News Vector Database - Provider Implementations
//!
//! User-selectable implementations of the ports defined in `nvdb-domain`
//! and `nvdb-application`. Every provider registers itself in a linkme
//! registry and is picked by name from configuration.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | Gemini, Null |
//! | Storage | `NewsRepository` | Postgres, InMemory |
//!
//! ## Usage
//!
//! ```ignore
//! use nvdb_providers::embedding::GeminiEmbeddingProvider;
//! use nvdb_providers::repository::PostgresNewsRepository;
//! ```

// Re-export types commonly used with providers
pub use nvdb_application::ports::EmbeddingProvider;
pub use nvdb_domain::error::{Error, Result};
pub use nvdb_domain::repositories::NewsRepository;

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Embedding provider implementations
///
/// Implements `EmbeddingProvider` for embedding APIs.
pub mod embedding;

/// News repository implementations
///
/// Implements `NewsRepository` for storage backends.
pub mod repository;
