//! News article entities

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::value_objects::NewsText;

/// Entity: News Record
///
/// A stored news article. `embedding` holds the serialized vector
/// (JSON numeric array) once one has been generated; records without it
/// are not similarity candidates. Records with `deleted_at` set are
/// soft-deleted and never returned by storage queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsRecord {
    /// Opaque record identifier
    pub news_id: String,
    /// Headline
    pub news_header: Option<String>,
    /// Body or summary text
    pub news_desc: Option<NewsText>,
    /// Publication timestamp
    pub date_time: Option<NaiveDateTime>,
    /// Serialized embedding vector
    pub embedding: Option<String>,
    /// Soft-delete timestamp
    pub deleted_at: Option<NaiveDateTime>,
}

impl NewsRecord {
    /// Create a record with only an identifier
    pub fn new(news_id: impl Into<String>) -> Self {
        Self {
            news_id: news_id.into(),
            news_header: None,
            news_desc: None,
            date_time: None,
            embedding: None,
            deleted_at: None,
        }
    }

    /// Set the headline
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.news_header = Some(header.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, desc: impl Into<NewsText>) -> Self {
        self.news_desc = Some(desc.into());
        self
    }

    /// Set the publication timestamp
    #[must_use]
    pub fn with_date_time(mut self, date_time: NaiveDateTime) -> Self {
        self.date_time = Some(date_time);
        self
    }

    /// Set the serialized embedding
    #[must_use]
    pub fn with_embedding(mut self, embedding: impl Into<String>) -> Self {
        self.embedding = Some(embedding.into());
        self
    }

    /// Mark the record as soft-deleted
    #[must_use]
    pub fn with_deleted_at(mut self, deleted_at: NaiveDateTime) -> Self {
        self.deleted_at = Some(deleted_at);
        self
    }

    /// Whether a serialized embedding is stored
    pub fn has_embedding(&self) -> bool {
        self.embedding.is_some()
    }

    /// Whether the record is soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Whether the record still needs an embedding
    ///
    /// A pending record is live, has a description and has no embedding.
    pub fn is_pending(&self) -> bool {
        !self.is_deleted() && self.news_desc.is_some() && self.embedding.is_none()
    }

    /// Description coerced to a string, if any
    pub fn description(&self) -> Option<String> {
        self.news_desc.as_ref().map(|d| d.normalize().into_owned())
    }
}

/// Entity: Scored News
///
/// A news article ranked against a query. The score is raw cosine
/// similarity; no range is assumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredNews {
    /// Record identifier
    pub news_id: String,
    /// Headline
    pub news_header: Option<String>,
    /// Description, normalized to text
    pub news_desc: Option<String>,
    /// Publication timestamp
    pub date_time: Option<NaiveDateTime>,
    /// Similarity to the query vector
    pub score: f64,
}

impl ScoredNews {
    /// Pair a record with its score
    pub fn from_record(record: &NewsRecord, score: f64) -> Self {
        Self {
            news_id: record.news_id.clone(),
            news_header: record.news_header.clone(),
            news_desc: record.description(),
            date_time: record.date_time,
            score,
        }
    }
}

/// Serialized embedding waiting to be written to a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddingUpdate {
    /// Target record
    pub news_id: String,
    /// Serialized vector
    pub embedding: String,
}

impl EmbeddingUpdate {
    /// Create an update
    pub fn new(news_id: impl Into<String>, embedding: impl Into<String>) -> Self {
        Self {
            news_id: news_id.into(),
            embedding: embedding.into(),
        }
    }
}
