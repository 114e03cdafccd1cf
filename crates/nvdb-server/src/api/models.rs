//! Request and response bodies
//!
//! Responses are wrapped in [`SuccessResponse`]; payloads mirror the use case
//! outcomes with scores rounded for display and timestamps as text.

use chrono::NaiveDateTime;
use nvdb_application::ports::services::{
    BatchEmbeddingReport, CompareOutcome, CompareQuery, EmbedRecordOutcome, FailedItem,
};
use nvdb_domain::constants::{
    DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_TOP_K, DESCRIPTION_PREVIEW_CHARS,
    SCORE_DISPLAY_DECIMALS,
};
use nvdb_domain::value_objects::preview;
use nvdb_domain::{Embedding, ScoredNews};
use serde::{Deserialize, Serialize};

use crate::constants::STATUS_SUCCESS;

/// Timestamp format of `date_time` fields
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Round a raw score for display
pub fn display_score(score: f64) -> f64 {
    let factor = 10f64.powi(SCORE_DISPLAY_DECIMALS);
    (score * factor).round() / factor
}

fn display_date_time(date_time: Option<NaiveDateTime>) -> Option<String> {
    date_time.map(|dt| dt.format(DATE_TIME_FORMAT).to_string())
}

// ============================================================================
// Envelopes
// ============================================================================

/// Success envelope
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T> {
    /// Always `success`
    pub status: &'static str,
    /// Optional summary line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Payload
    pub data: T,
}

impl<T> SuccessResponse<T> {
    /// Envelope without a message
    pub fn new(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS,
            message: None,
            data,
        }
    }

    /// Envelope with a summary line
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            status: STATUS_SUCCESS,
            message: Some(message.into()),
            data,
        }
    }
}

/// Body of `GET /health` and `GET /db/test`
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Status label
    pub status: &'static str,
    /// Human-readable detail
    pub message: String,
}

/// Body of `GET {prefix}/`
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    /// Greeting
    pub message: &'static str,
}

/// Body of `GET {prefix}/config`
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    /// Deployment environment name
    pub environment: String,
    /// Whether a database URL is configured
    pub database_configured: bool,
    /// Active news repository
    pub database_provider: String,
    /// Active embedding provider
    pub embedding_provider: String,
    /// Active embedding model
    pub embedding_model: String,
}

// ============================================================================
// POST /embedding
// ============================================================================

/// Free text to embed
#[derive(Debug, Deserialize)]
pub struct EmbedTextRequest {
    /// Text to embed
    pub news_desc: String,
}

/// Embedding of free text
#[derive(Debug, Serialize)]
pub struct EmbedTextData {
    /// Echo of the input text
    pub news_desc: String,
    /// Vector components
    pub embedding: Vec<f64>,
    /// Vector length
    pub embedding_dimension: usize,
    /// Generating model
    pub model: String,
}

impl EmbedTextData {
    /// Pair the input text with its embedding
    pub fn new(news_desc: String, embedding: Embedding) -> Self {
        Self {
            news_desc,
            embedding_dimension: embedding.dimensions(),
            model: embedding.model,
            embedding: embedding.vector.into_inner(),
        }
    }
}

// ============================================================================
// POST /embedding-id
// ============================================================================

/// Record to embed and persist
#[derive(Debug, Deserialize)]
pub struct EmbedRecordRequest {
    /// Record identifier
    pub news_id: String,
}

/// Summary of a persisted embedding
#[derive(Debug, Serialize)]
pub struct EmbedRecordData {
    /// Record identifier
    pub news_id: String,
    /// Headline, empty when absent
    pub news_header: String,
    /// Description preview
    pub news_desc: String,
    /// Vector length
    pub embedding_dimension: usize,
    /// Publication timestamp
    pub date_time: Option<String>,
    /// Generating model
    pub model: String,
}

impl From<EmbedRecordOutcome> for EmbedRecordData {
    fn from(outcome: EmbedRecordOutcome) -> Self {
        Self {
            news_id: outcome.news_id,
            news_header: outcome.news_header,
            news_desc: outcome.news_desc,
            embedding_dimension: outcome.embedding_dimension,
            date_time: display_date_time(outcome.date_time),
            model: outcome.model,
        }
    }
}

// ============================================================================
// POST /embedding/batch/all
// ============================================================================

/// Batch embedding counts
#[derive(Debug, Serialize)]
pub struct BatchData {
    /// Pending records examined
    pub processed: usize,
    /// Records embedded and committed
    pub success: usize,
    /// Records that failed
    pub failed: usize,
    /// First failures
    pub failed_items: Vec<FailedItem>,
}

impl From<BatchEmbeddingReport> for BatchData {
    fn from(report: BatchEmbeddingReport) -> Self {
        Self {
            processed: report.processed,
            success: report.success,
            failed: report.failed,
            failed_items: report.failed_items,
        }
    }
}

// ============================================================================
// POST /similarity-compare
// ============================================================================

/// Similarity query
///
/// Accepts `text` or `news_desc` for the query text and `vector` or
/// `embedding` for a pre-computed vector.
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    /// Query text
    #[serde(default, alias = "news_desc")]
    pub text: Option<String>,
    /// Serialized query vector
    #[serde(default, alias = "embedding")]
    pub vector: Option<String>,
    /// Minimum score
    #[serde(default)]
    pub threshold: Option<f64>,
    /// Maximum number of results
    #[serde(default)]
    pub top_k: Option<i64>,
}

impl From<CompareRequest> for CompareQuery {
    fn from(request: CompareRequest) -> Self {
        Self {
            text: request.text,
            vector: request.vector,
            threshold: request.threshold.unwrap_or(DEFAULT_SIMILARITY_THRESHOLD),
            top_k: request.top_k.unwrap_or(DEFAULT_TOP_K),
        }
    }
}

/// One ranked match
#[derive(Debug, Serialize)]
pub struct ResultItem {
    /// Record identifier
    pub news_id: String,
    /// Headline
    pub news_header: Option<String>,
    /// Description preview
    pub news_desc: Option<String>,
    /// Rounded similarity score
    pub similarity_score: f64,
    /// Publication timestamp
    pub date_time: Option<String>,
}

impl From<ScoredNews> for ResultItem {
    fn from(scored: ScoredNews) -> Self {
        Self {
            news_id: scored.news_id,
            news_header: scored.news_header,
            news_desc: scored
                .news_desc
                .map(|desc| preview(&desc, DESCRIPTION_PREVIEW_CHARS)),
            similarity_score: display_score(scored.score),
            date_time: display_date_time(scored.date_time),
        }
    }
}

/// Ranked matches with diagnostics
#[derive(Debug, Serialize)]
pub struct CompareData {
    /// Echo of the query text
    pub query: Option<String>,
    /// Best matches, highest score first
    pub results: Vec<ResultItem>,
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

impl From<CompareOutcome> for CompareData {
    fn from(outcome: CompareOutcome) -> Self {
        Self {
            query: outcome.query,
            results: outcome.results.into_iter().map(ResultItem::from).collect(),
            total_compared: outcome.total_compared,
            total_above_threshold: outcome.total_above_threshold,
            skipped: outcome.skipped,
            top_k: outcome.top_k,
            threshold: outcome.threshold,
            method: outcome.method,
        }
    }
}
