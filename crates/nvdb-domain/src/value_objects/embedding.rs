//! Semantic Embedding Value Objects
//!
//! Vectors produced by an embedding model and the text form they are
//! persisted in.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Value Object: Embedding Vector
///
/// Ordered sequence of `f64` components. The dimension is a runtime
/// property; two vectors are only comparable when their lengths match.
///
/// The persisted form is a JSON numeric array, e.g. `[0.1,0.2,0.3]`.
///
/// ## Example
///
/// ```rust
/// use nvdb_domain::value_objects::EmbeddingVector;
///
/// let vector = EmbeddingVector::from_json("[0.5, 0.25, 1.0]").unwrap();
/// assert_eq!(vector.dimensions(), 3);
/// assert_eq!(vector.to_json().unwrap(), "[0.5,0.25,1.0]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmbeddingVector(Vec<f64>);

impl EmbeddingVector {
    /// Wrap raw components
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Number of components
    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector has no components
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the components
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Take ownership of the components
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Decode a vector from its persisted JSON text
    ///
    /// Anything other than a JSON array of finite numbers is rejected with
    /// [`Error::InvalidArgument`].
    pub fn from_json(text: &str) -> Result<Self> {
        let values: Vec<f64> = serde_json::from_str(text.trim()).map_err(|e| {
            Error::invalid_argument(format!("Embedding vector is not a JSON number array: {e}"))
        })?;

        if let Some(position) = values.iter().position(|v| !v.is_finite()) {
            return Err(Error::invalid_argument(format!(
                "Embedding vector component {position} is not a finite number"
            )));
        }

        Ok(Self(values))
    }

    /// Encode the vector as compact JSON text
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

impl From<Vec<f64>> for EmbeddingVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl AsRef<[f64]> for EmbeddingVector {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// Value Object: Semantic Text Embedding
///
/// An [`EmbeddingVector`] together with the name of the model that
/// generated it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: EmbeddingVector,
    /// Name of the model that generated this embedding
    pub model: String,
}

impl Embedding {
    /// Create an embedding from raw components
    pub fn new(values: Vec<f64>, model: impl Into<String>) -> Self {
        Self {
            vector: EmbeddingVector::new(values),
            model: model.into(),
        }
    }

    /// Dimensionality of the embedding vector
    pub fn dimensions(&self) -> usize {
        self.vector.dimensions()
    }
}
