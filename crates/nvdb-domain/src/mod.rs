//! # Domain Layer
//!
//! Core types and business rules of the news vector database.
//!
//! This crate has no knowledge of HTTP, databases or embedding vendors.
//! It defines what a news record is, how embedding vectors are encoded,
//! which storage operations the application relies on, and how stored
//! vectors are scored against a query.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error type and result alias |
//! | [`constants`] | Domain defaults (threshold, top-k, preview length) |
//! | [`value_objects`] | Embedding vectors, task types, stored text |
//! | [`entities`] | News records and scored results |
//! | [`repositories`] | Storage port for news records |
//! | [`similarity`] | Cosine similarity and ranking engine |

pub mod constants;
pub mod entities;
pub mod error;
pub mod repositories;
pub mod similarity;
pub mod value_objects;

pub use entities::{EmbeddingUpdate, NewsRecord, ScoredNews};
pub use error::{Error, ErrorKind, Result};
pub use repositories::NewsRepository;
pub use similarity::{
    BruteForceCosineEngine, RankedResults, SimilarityEngine, cosine_similarity, rank_and_filter,
};
pub use value_objects::{Embedding, EmbeddingVector, NewsText, TaskType};
