//! Embedding task types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Intended downstream use of an embedding
///
/// Providers that support it tune the vector for the task. Wire names
/// follow the Generative Language API (`SEMANTIC_SIMILARITY`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    /// Text will be stored and searched against
    RetrievalDocument,
    /// Text is a search query
    RetrievalQuery,
    /// Texts will be compared with each other
    #[default]
    SemanticSimilarity,
    /// Text will be classified
    Classification,
    /// Texts will be clustered
    Clustering,
}

impl TaskType {
    /// Wire name of the task type
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RetrievalDocument => "RETRIEVAL_DOCUMENT",
            Self::RetrievalQuery => "RETRIEVAL_QUERY",
            Self::SemanticSimilarity => "SEMANTIC_SIMILARITY",
            Self::Classification => "CLASSIFICATION",
            Self::Clustering => "CLUSTERING",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
