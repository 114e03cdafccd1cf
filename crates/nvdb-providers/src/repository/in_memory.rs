//! In-memory news repository
//!
//! Keeps records in a concurrent hash map. Data is not persisted and is
//! lost on restart. Queries return records in insertion order.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use nvdb_application::ports::registry::{
    NEWS_REPOSITORIES, NewsRepositoryConfig, NewsRepositoryEntry,
};
use nvdb_domain::entities::{EmbeddingUpdate, NewsRecord};
use nvdb_domain::error::{Error, Result};
use nvdb_domain::repositories::NewsRepository;

/// Stored record with its insertion sequence number
type Slot = (u64, NewsRecord);

/// In-memory news repository
#[derive(Default)]
pub struct InMemoryNewsRepository {
    records: DashMap<String, Slot>,
    next_seq: AtomicU64,
}

impl InMemoryNewsRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `records`, in order
    pub fn with_records(records: impl IntoIterator<Item = NewsRecord>) -> Self {
        let repo = Self::new();
        for record in records {
            repo.insert(record);
        }
        repo
    }

    /// Insert or replace a record
    ///
    /// A replaced record keeps its original position.
    pub fn insert(&self, record: NewsRecord) {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.records
            .entry(record.news_id.clone())
            .and_modify(|slot| slot.1 = record.clone())
            .or_insert((seq, record));
    }

    /// Raw lookup, including soft-deleted records
    pub fn get(&self, news_id: &str) -> Option<NewsRecord> {
        self.records.get(news_id).map(|slot| slot.1.clone())
    }

    /// Number of stored records, including soft-deleted ones
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the repository holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn collect_ordered(&self, keep: impl Fn(&NewsRecord) -> bool) -> Vec<NewsRecord> {
        let mut slots: Vec<Slot> = self
            .records
            .iter()
            .filter(|entry| !entry.1.is_deleted() && keep(&entry.1))
            .map(|entry| entry.value().clone())
            .collect();
        slots.sort_by_key(|slot| slot.0);
        slots.into_iter().map(|slot| slot.1).collect()
    }
}

#[async_trait]
impl NewsRepository for InMemoryNewsRepository {
    async fn find_by_id(&self, news_id: &str) -> Result<NewsRecord> {
        self.records
            .get(news_id)
            .map(|slot| slot.1.clone())
            .filter(|record| !record.is_deleted())
            .ok_or_else(|| Error::not_found(format!("News item with ID '{news_id}'")))
    }

    async fn find_with_embedding(&self) -> Result<Vec<NewsRecord>> {
        Ok(self.collect_ordered(NewsRecord::has_embedding))
    }

    async fn find_pending_embedding(&self) -> Result<Vec<NewsRecord>> {
        Ok(self.collect_ordered(NewsRecord::is_pending))
    }

    async fn save_embedding(&self, news_id: &str, embedding: &str) -> Result<NewsRecord> {
        let mut slot = self
            .records
            .get_mut(news_id)
            .filter(|slot| !slot.1.is_deleted())
            .ok_or_else(|| Error::not_found(format!("News item with ID '{news_id}'")))?;

        slot.1.embedding = Some(embedding.to_string());
        Ok(slot.1.clone())
    }

    async fn commit_embeddings(&self, updates: &[EmbeddingUpdate]) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(updates.len());
        for update in updates {
            if let Some(mut slot) = self.records.get_mut(&update.news_id) {
                if !slot.1.is_deleted() {
                    slot.1.embedding = Some(update.embedding.clone());
                    written.push(update.news_id.clone());
                }
            }
        }
        Ok(written)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn in_memory_repository_factory(
    _config: &NewsRepositoryConfig,
) -> std::result::Result<Arc<dyn NewsRepository>, String> {
    Ok(Arc::new(InMemoryNewsRepository::new()))
}

#[linkme::distributed_slice(NEWS_REPOSITORIES)]
static IN_MEMORY_NEWS_REPOSITORY: NewsRepositoryEntry = NewsRepositoryEntry {
    name: "memory",
    description: "In-memory news repository (non-persistent, for testing)",
    factory: in_memory_repository_factory,
};
