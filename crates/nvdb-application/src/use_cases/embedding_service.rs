//! Embedding Service Use Case
//!
//! Generates embeddings through the provider port and persists them
//! through the storage port, one record at a time or for every pending
//! record in a single commit.

use std::sync::Arc;

use nvdb_domain::constants::{
    DESCRIPTION_PREVIEW_CHARS, EMPTY_DESCRIPTION_REASON, MAX_REPORTED_FAILURES,
    RECORD_VANISHED_REASON,
};
use nvdb_domain::entities::{EmbeddingUpdate, NewsRecord};
use nvdb_domain::error::{Error, Result};
use nvdb_domain::repositories::NewsRepository;
use nvdb_domain::value_objects::{Embedding, preview};
use tracing::{info, warn};

use super::embed_for_similarity;
use crate::ports::providers::EmbeddingProvider;
use crate::ports::services::{
    BatchEmbeddingReport, EmbedRecordOutcome, EmbeddingServiceInterface, FailedItem,
};

/// Embedding service implementation
pub struct EmbeddingServiceImpl {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    repository: Arc<dyn NewsRepository>,
}

impl EmbeddingServiceImpl {
    /// Create new embedding service with injected dependencies
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        repository: Arc<dyn NewsRepository>,
    ) -> Self {
        Self {
            embedding_provider,
            repository,
        }
    }

    async fn embed(&self, text: &str) -> Result<Embedding> {
        embed_for_similarity(self.embedding_provider.as_ref(), text).await
    }

    /// Embed one pending record, returning the serialized vector
    async fn embed_pending_record(&self, record: &NewsRecord) -> Result<String> {
        let text = record.description().unwrap_or_default();
        if text.trim().is_empty() {
            return Err(Error::invalid_argument(EMPTY_DESCRIPTION_REASON));
        }

        let embedding = self.embed(&text).await?;
        embedding.vector.to_json()
    }
}

#[async_trait::async_trait]
impl EmbeddingServiceInterface for EmbeddingServiceImpl {
    async fn embed_text(&self, text: &str) -> Result<Embedding> {
        if text.trim().is_empty() {
            return Err(Error::invalid_argument("news_desc must not be empty"));
        }
        self.embed(text).await
    }

    async fn embed_record(&self, news_id: &str) -> Result<EmbedRecordOutcome> {
        let record = self.repository.find_by_id(news_id).await?;

        let text = record
            .description()
            .ok_or_else(|| {
                Error::invalid_argument("News description is empty, cannot generate embedding")
            })?;
        if text.trim().is_empty() {
            return Err(Error::invalid_argument(
                "News description is empty after decoding",
            ));
        }

        let embedding = self.embed(&text).await?;
        let serialized = embedding.vector.to_json()?;
        let saved = self.repository.save_embedding(news_id, &serialized).await?;

        info!(
            news_id = %saved.news_id,
            dimensions = embedding.dimensions(),
            "Embedding created and saved"
        );

        Ok(EmbedRecordOutcome {
            news_id: saved.news_id,
            news_header: saved.news_header.unwrap_or_default(),
            news_desc: preview(&text, DESCRIPTION_PREVIEW_CHARS),
            embedding_dimension: embedding.dimensions(),
            date_time: saved.date_time,
            model: embedding.model,
        })
    }

    async fn embed_pending(&self) -> Result<BatchEmbeddingReport> {
        let pending = self.repository.find_pending_embedding().await?;
        if pending.is_empty() {
            info!("All news already have embeddings");
            return Ok(BatchEmbeddingReport::default());
        }

        let mut updates = Vec::with_capacity(pending.len());
        let mut failures = Vec::new();

        for record in &pending {
            match self.embed_pending_record(record).await {
                Ok(serialized) => {
                    updates.push(EmbeddingUpdate::new(record.news_id.clone(), serialized));
                }
                Err(e) => {
                    let reason = match e {
                        Error::InvalidArgument { message } => message,
                        other => other.to_string(),
                    };
                    warn!(news_id = %record.news_id, %reason, "Failed to embed pending news");
                    failures.push(FailedItem {
                        news_id: record.news_id.clone(),
                        reason,
                    });
                }
            }
        }

        let mut success = 0;
        if !updates.is_empty() {
            let written = self.repository.commit_embeddings(&updates).await?;
            info!(written = written.len(), "Committed batch embeddings");
            success = written.len();

            for update in updates.iter().filter(|u| !written.contains(&u.news_id)) {
                warn!(news_id = %update.news_id, "Pending news vanished before commit");
                failures.push(FailedItem {
                    news_id: update.news_id.clone(),
                    reason: RECORD_VANISHED_REASON.to_string(),
                });
            }
        }

        let failed = failures.len();
        failures.truncate(MAX_REPORTED_FAILURES);

        let report = BatchEmbeddingReport {
            processed: pending.len(),
            success,
            failed,
            failed_items: failures,
        };
        info!(
            processed = report.processed,
            success = report.success,
            failed = report.failed,
            "Batch embedding completed"
        );
        Ok(report)
    }
}
