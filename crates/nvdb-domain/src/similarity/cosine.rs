//! Cosine similarity kernel

use crate::error::{Error, Result};

/// Cosine similarity between two vectors of equal length
///
/// Returns `dot(a, b) / (|a| * |b|)`. A zero-magnitude input yields `0.0`.
/// Vectors of different lengths are rejected with
/// [`Error::InvalidArgument`]; they are never truncated to match. Each
/// vector is scaled by its largest component first, so very large or very
/// small magnitudes neither overflow nor underflow.
///
/// ```rust
/// use nvdb_domain::similarity::cosine_similarity;
///
/// let score = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
/// assert_eq!(score, 0.0);
/// ```
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dimensions(a, b)?;
    Ok(cosine_similarity_with_magnitude(a, b, Magnitude::of(a)))
}

pub(crate) fn check_dimensions(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!(
            "Vector dimension mismatch: {} vs {}",
            a.len(),
            b.len()
        )))
    }
}

/// Euclidean norm of `v` stored as `scale * unit_norm`
///
/// `scale` is the largest absolute component. `unit_norm` is the norm of
/// `v / scale` and lies in `[1, sqrt(len)]` for non-zero vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Magnitude {
    scale: f64,
    unit_norm: f64,
}

impl Magnitude {
    pub(crate) fn of(v: &[f64]) -> Self {
        let scale = v.iter().fold(0.0_f64, |max, x| max.max(x.abs()));
        if scale == 0.0 || !scale.is_finite() {
            return Self {
                scale,
                unit_norm: 0.0,
            };
        }

        let unit_norm = v
            .iter()
            .map(|x| {
                let s = x / scale;
                s * s
            })
            .sum::<f64>()
            .sqrt();
        Self { scale, unit_norm }
    }

    fn is_zero(self) -> bool {
        self.scale == 0.0 || self.unit_norm == 0.0
    }
}

/// Cosine similarity with the magnitude of `a` computed up front
///
/// Callers must have checked that the lengths match.
pub(crate) fn cosine_similarity_with_magnitude(a: &[f64], b: &[f64], mag_a: Magnitude) -> f64 {
    let mag_b = Magnitude::of(b);
    if mag_a.is_zero() || mag_b.is_zero() {
        return 0.0;
    }

    let dot_product: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| (x / mag_a.scale) * (y / mag_b.scale))
        .sum();
    dot_product / (mag_a.unit_norm * mag_b.unit_norm)
}
