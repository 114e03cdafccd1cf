//! Similarity Service Use Case
//!
//! Resolves the query vector, loads every stored embedding and hands the
//! corpus to the similarity engine. Never writes.

use std::sync::Arc;

use nvdb_domain::error::{Error, Result};
use nvdb_domain::repositories::NewsRepository;
use nvdb_domain::similarity::{BruteForceCosineEngine, SimilarityEngine};
use nvdb_domain::value_objects::EmbeddingVector;
use tracing::{debug, info};

use super::embed_for_similarity;
use crate::ports::providers::EmbeddingProvider;
use crate::ports::services::{CompareOutcome, CompareQuery, SimilarityServiceInterface};

/// Similarity service implementation
pub struct SimilarityServiceImpl {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    repository: Arc<dyn NewsRepository>,
    engine: Arc<dyn SimilarityEngine>,
}

impl SimilarityServiceImpl {
    /// Create a service ranking with [`BruteForceCosineEngine`]
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        repository: Arc<dyn NewsRepository>,
    ) -> Self {
        Self::with_engine(
            embedding_provider,
            repository,
            Arc::new(BruteForceCosineEngine::new()),
        )
    }

    /// Create a service with a specific ranking engine
    pub fn with_engine(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        repository: Arc<dyn NewsRepository>,
        engine: Arc<dyn SimilarityEngine>,
    ) -> Self {
        Self {
            embedding_provider,
            repository,
            engine,
        }
    }
}

#[async_trait::async_trait]
impl SimilarityServiceInterface for SimilarityServiceImpl {
    async fn resolve_query_vector(&self, query: &CompareQuery) -> Result<EmbeddingVector> {
        if let Some(text) = query.supplied_vector() {
            let vector = EmbeddingVector::from_json(text)?;
            if vector.is_empty() {
                return Err(Error::invalid_argument("Query embedding must not be empty"));
            }
            return Ok(vector);
        }

        let text = query
            .text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                Error::invalid_argument("Query text is required when no embedding is supplied")
            })?;

        let embedding = embed_for_similarity(self.embedding_provider.as_ref(), text).await?;
        Ok(embedding.vector)
    }

    async fn compare(&self, query: &CompareQuery) -> Result<CompareOutcome> {
        let vector = self.resolve_query_vector(query).await?;
        let candidates = self.repository.find_with_embedding().await?;

        let mut outcome = CompareOutcome {
            query: query.text.clone(),
            results: Vec::new(),
            total_compared: 0,
            total_above_threshold: 0,
            skipped: 0,
            top_k: query.top_k,
            threshold: query.threshold,
            method: self.engine.method().to_string(),
        };

        if candidates.is_empty() {
            info!("No stored embeddings to compare against");
            return Ok(outcome);
        }

        let engine = Arc::clone(&self.engine);
        let (threshold, top_k) = (query.threshold, query.top_k);
        let ranked =
            tokio::task::spawn_blocking(move || engine.rank(&vector, &candidates, threshold, top_k))
                .await
                .map_err(|e| Error::internal(format!("Similarity ranking task failed: {e}")))?;

        if ranked.skipped > 0 {
            debug!(
                skipped = ranked.skipped,
                "Skipped candidates with unusable stored embeddings"
            );
        }
        info!(
            total_compared = ranked.total_compared,
            total_above_threshold = ranked.total_above_threshold,
            returned = ranked.results.len(),
            "Similarity comparison completed"
        );

        outcome.results = ranked.results;
        outcome.total_compared = ranked.total_compared;
        outcome.total_above_threshold = ranked.total_above_threshold;
        outcome.skipped = ranked.skipped;
        Ok(outcome)
    }
}
