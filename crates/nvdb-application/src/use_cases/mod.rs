//! Use Case Implementations
//!
//! | Use Case | Description |
//! |----------|-------------|
//! | [`SimilarityServiceImpl`] | Resolves query vectors and ranks stored embeddings |
//! | [`EmbeddingServiceImpl`] | Generates and persists embeddings |

pub mod embedding_service;
pub mod similarity_service;

pub use embedding_service::EmbeddingServiceImpl;
pub use similarity_service::SimilarityServiceImpl;

use nvdb_domain::error::{Error, ErrorKind, Result};
use nvdb_domain::value_objects::{Embedding, TaskType};

use crate::ports::providers::EmbeddingProvider;

/// Embed `text` for similarity comparison
///
/// Every failure, including an empty vector, surfaces as an upstream
/// error.
pub(crate) async fn embed_for_similarity(
    provider: &dyn EmbeddingProvider,
    text: &str,
) -> Result<Embedding> {
    let embedding = provider
        .embed(text, TaskType::SemanticSimilarity)
        .await
        .map_err(|e| match e.kind() {
            ErrorKind::Upstream => e,
            _ => Error::embedding(e.to_string()),
        })?;

    if embedding.vector.is_empty() {
        return Err(Error::embedding(format!(
            "Provider '{}' returned an empty embedding",
            provider.provider_name()
        )));
    }

    Ok(embedding)
}
