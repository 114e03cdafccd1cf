//! Domain Value Objects
//!
//! Immutable values without identity, compared by their attributes.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`EmbeddingVector`] | Fixed-length numeric vector with a JSON text form |
//! | [`Embedding`] | Vector together with the model that produced it |
//! | [`TaskType`] | Intended use of an embedding, sent to the provider |
//! | [`NewsText`] | Stored description, decoded text or raw bytes |

/// Semantic embedding value objects
pub mod embedding;
/// Embedding task types
pub mod task_type;
/// Stored text representation
pub mod text;

pub use embedding::{Embedding, EmbeddingVector};
pub use task_type::TaskType;
pub use text::{NewsText, preview};
