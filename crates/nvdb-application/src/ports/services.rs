//! Application Service Port Interfaces
//!
//! Contracts implemented by the use cases and consumed by the transport
//! layer, together with the values they exchange.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use nvdb_domain::constants::{DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_TOP_K};
use nvdb_domain::entities::ScoredNews;
use nvdb_domain::error::Result;
use nvdb_domain::value_objects::{Embedding, EmbeddingVector};
use serde::Serialize;

// ============================================================================
// Similarity Service Interface
// ============================================================================

/// A similarity comparison request
///
/// A non-blank `vector` takes precedence over `text`; `text` is only
/// embedded when no vector is supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareQuery {
    /// Free text to embed and compare
    pub text: Option<String>,
    /// Serialized query vector (JSON numeric array)
    pub vector: Option<String>,
    /// Minimum score for inclusion
    pub threshold: f64,
    /// Maximum number of results; non-positive yields none
    pub top_k: i64,
}

impl Default for CompareQuery {
    fn default() -> Self {
        Self {
            text: None,
            vector: None,
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl CompareQuery {
    /// Query by free text
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Query by serialized vector
    pub fn from_vector(vector: impl Into<String>) -> Self {
        Self {
            vector: Some(vector.into()),
            ..Default::default()
        }
    }

    /// Set the threshold
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the result limit
    #[must_use]
    pub fn with_top_k(mut self, top_k: i64) -> Self {
        self.top_k = top_k;
        self
    }

    /// Supplied vector text, if present and not blank
    pub fn supplied_vector(&self) -> Option<&str> {
        self.vector.as_deref().filter(|v| !v.trim().is_empty())
    }
}

/// Result of a similarity comparison
#[derive(Debug, Clone, PartialEq)]
pub struct CompareOutcome {
    /// Echo of the query text
    pub query: Option<String>,
    /// Best matches, highest score first
    pub results: Vec<ScoredNews>,
    /// Candidates considered
    pub total_compared: usize,
    /// Candidates at or above the threshold
    pub total_above_threshold: usize,
    /// Candidates with an unusable stored vector
    pub skipped: usize,
    /// Requested result limit
    pub top_k: i64,
    /// Requested threshold
    pub threshold: f64,
    /// Ranking method label
    pub method: String,
}

/// Similarity Query Orchestrator Interface
#[async_trait]
pub trait SimilarityServiceInterface: Send + Sync {
    /// Decode the supplied vector or embed the query text
    async fn resolve_query_vector(&self, query: &CompareQuery) -> Result<EmbeddingVector>;

    /// Rank stored embeddings against the query
    async fn compare(&self, query: &CompareQuery) -> Result<CompareOutcome>;
}

// ============================================================================
// Embedding Service Interface
// ============================================================================

/// Summary of an embedding generated and stored for one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedRecordOutcome {
    /// Record identifier
    pub news_id: String,
    /// Headline, empty when absent
    pub news_header: String,
    /// Description preview
    pub news_desc: String,
    /// Dimension of the stored vector
    pub embedding_dimension: usize,
    /// Publication timestamp
    pub date_time: Option<NaiveDateTime>,
    /// Model that generated the vector
    pub model: String,
}

/// A pending record the batch could not embed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedItem {
    /// Record identifier
    pub news_id: String,
    /// Failure reason
    pub reason: String,
}

/// Outcome of embedding every pending record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchEmbeddingReport {
    /// Pending records examined
    pub processed: usize,
    /// Records embedded and committed
    pub success: usize,
    /// Records that failed
    pub failed: usize,
    /// First failures, capped
    pub failed_items: Vec<FailedItem>,
}

impl BatchEmbeddingReport {
    /// Human-readable summary line
    pub fn message(&self) -> String {
        if self.processed == 0 {
            "All news already have embeddings".to_string()
        } else {
            format!("Processed {} news items", self.processed)
        }
    }
}

/// Embedding Generation Interface
#[async_trait]
pub trait EmbeddingServiceInterface: Send + Sync {
    /// Embed free text without touching storage
    async fn embed_text(&self, text: &str) -> Result<Embedding>;

    /// Embed one stored record and persist the vector
    async fn embed_record(&self, news_id: &str) -> Result<EmbedRecordOutcome>;

    /// Embed every pending record and commit the results together
    async fn embed_pending(&self) -> Result<BatchEmbeddingReport>;
}
