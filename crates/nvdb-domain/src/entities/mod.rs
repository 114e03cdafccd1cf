//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`NewsRecord`] | Stored news article with its optional embedding |
//! | [`ScoredNews`] | News article paired with a similarity score |
//! | [`EmbeddingUpdate`] | Pending write of a serialized embedding |

/// News article entities
pub mod news;

pub use news::{EmbeddingUpdate, NewsRecord, ScoredNews};
