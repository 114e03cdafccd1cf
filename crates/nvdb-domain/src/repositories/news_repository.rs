//! News Repository Interface

use async_trait::async_trait;

use crate::entities::{EmbeddingUpdate, NewsRecord};
use crate::error::Result;

/// Repository: News Record Storage
///
/// Every query ignores soft-deleted records.
///
/// # Example
///
/// ```ignore
/// use nvdb_domain::repositories::NewsRepository;
///
/// let candidates = repo.find_with_embedding().await?;
/// let record = repo.save_embedding("n-42", "[0.1,0.2]").await?;
/// let written_ids = repo.commit_embeddings(&updates).await?;
/// ```
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Fetch one live record
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) for unknown or
    /// soft-deleted ids.
    async fn find_by_id(&self, news_id: &str) -> Result<NewsRecord>;

    /// All live records with a stored embedding, in storage order
    async fn find_with_embedding(&self) -> Result<Vec<NewsRecord>>;

    /// All live records with a description and no embedding
    async fn find_pending_embedding(&self) -> Result<Vec<NewsRecord>>;

    /// Persist one serialized embedding atomically and return the
    /// updated record
    async fn save_embedding(&self, news_id: &str, embedding: &str) -> Result<NewsRecord>;

    /// Persist a batch of embeddings in one transaction
    ///
    /// Either every update is written or none is. Updates for records that
    /// no longer exist or were soft-deleted are skipped. Returns the ids
    /// that were written, in update order.
    async fn commit_embeddings(&self, updates: &[EmbeddingUpdate]) -> Result<Vec<String>>;

    /// Verify the storage backend is reachable
    async fn health_check(&self) -> Result<()>;

    /// Name of the storage backend
    fn provider_name(&self) -> &str;
}
