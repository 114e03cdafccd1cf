//! Embedding Provider Implementations
//!
//! Converts text into dense vectors for similarity comparison.
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | NullEmbeddingProvider | Testing | Complete |
//! | GeminiEmbeddingProvider | Cloud | Complete |
//!
//! Use `NullEmbeddingProvider` for unit tests and offline runs; it needs
//! no network and returns the same vector for the same text.

pub mod gemini;
pub mod helpers;
pub mod null;

pub use gemini::GeminiEmbeddingProvider;
pub use helpers::constructor;
pub use null::NullEmbeddingProvider;
