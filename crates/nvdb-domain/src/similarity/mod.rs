//! Similarity Engine
//!
//! Pure numeric scoring of stored embeddings against a query vector.
//! Nothing here performs I/O or mutates records.
//!
//! | Item | Description |
//! |------|-------------|
//! | [`cosine_similarity`] | Cosine of the angle between two vectors |
//! | [`rank_and_filter`] | Score, threshold, sort and truncate a corpus |
//! | [`SimilarityEngine`] | Seam for swapping the ranking strategy |
//! | [`BruteForceCosineEngine`] | Exhaustive cosine ranking |

/// Cosine similarity kernel
pub mod cosine;
/// Corpus ranking
pub mod engine;

pub use cosine::cosine_similarity;
pub use engine::{BruteForceCosineEngine, RankedResults, SimilarityEngine, rank_and_filter};
