use async_trait::async_trait;
use nvdb_domain::error::{Error, Result};
use nvdb_domain::value_objects::{Embedding, TaskType};

/// Text Embedding Interface
///
/// Contract for services that turn text into embedding vectors. The
/// application never talks to a vendor API directly; it goes through this
/// port so tests and offline runs can substitute a deterministic provider.
///
/// # Default Implementations
///
/// `embed()` delegates to `embed_batch()` with a single item. Providers
/// only need to implement `embed_batch()` unless a dedicated single-item
/// call is cheaper.
///
/// # Example
///
/// ```ignore
/// use nvdb_application::ports::providers::EmbeddingProvider;
/// use nvdb_domain::TaskType;
///
/// let embedding = provider.embed("Harga emas naik", TaskType::SemanticSimilarity).await?;
/// println!("Embedding dimensions: {}", embedding.dimensions());
///
/// let texts = vec!["first".to_string(), "second".to_string()];
/// let embeddings = provider.embed_batch(&texts, TaskType::RetrievalDocument).await?;
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str, task_type: TaskType) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()], task_type).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts, in input order
    async fn embed_batch(&self, texts: &[String], task_type: TaskType) -> Result<Vec<Embedding>>;

    /// Dimensionality of embeddings produced by this provider
    fn dimensions(&self) -> usize;

    /// Model identifier reported with generated embeddings
    fn model(&self) -> &str;

    /// Name of this provider implementation (e.g., "gemini", "null")
    fn provider_name(&self) -> &str;
}
