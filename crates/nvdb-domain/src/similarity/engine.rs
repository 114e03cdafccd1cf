//! Corpus ranking
//!
//! Scores every candidate record against a query vector, keeps the ones
//! at or above a threshold and returns the best `top_k` in descending
//! score order. Ties keep the order the candidates were supplied in.

use std::cmp::Ordering;

use rayon::prelude::*;

use super::cosine::{Magnitude, cosine_similarity_with_magnitude};
use crate::constants::{PARALLEL_SCORING_MIN_CANDIDATES, SIMILARITY_METHOD_BRUTE_FORCE};
use crate::entities::{NewsRecord, ScoredNews};
use crate::value_objects::EmbeddingVector;

/// Ranked comparison output with diagnostic counts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedResults {
    /// Best matches, highest score first, at most `top_k`
    pub results: Vec<ScoredNews>,
    /// Number of candidates considered
    pub total_compared: usize,
    /// Number of scored candidates at or above the threshold
    pub total_above_threshold: usize,
    /// Candidates whose stored vector was missing, malformed or of the
    /// wrong dimension
    pub skipped: usize,
}

/// Ranking strategy over a candidate corpus
///
/// Implementations must return results sorted by score descending,
/// contain only scores `>= threshold`, and hold at most `top_k` entries
/// (none when `top_k <= 0`).
pub trait SimilarityEngine: Send + Sync {
    /// Rank `candidates` against `query`
    fn rank(
        &self,
        query: &EmbeddingVector,
        candidates: &[NewsRecord],
        threshold: f64,
        top_k: i64,
    ) -> RankedResults;

    /// Label reported alongside results
    fn method(&self) -> &'static str;
}

/// Exhaustive cosine-similarity ranking
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceCosineEngine;

impl BruteForceCosineEngine {
    /// Create the engine
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityEngine for BruteForceCosineEngine {
    fn rank(
        &self,
        query: &EmbeddingVector,
        candidates: &[NewsRecord],
        threshold: f64,
        top_k: i64,
    ) -> RankedResults {
        rank_and_filter(query, candidates, threshold, top_k)
    }

    fn method(&self) -> &'static str {
        SIMILARITY_METHOD_BRUTE_FORCE
    }
}

/// Score, filter, sort and truncate a candidate corpus
///
/// Candidates whose stored vector cannot be decoded, has a different
/// dimension than `query`, or yields a non-finite score are counted in
/// [`RankedResults::skipped`] and otherwise ignored.
pub fn rank_and_filter(
    query: &EmbeddingVector,
    candidates: &[NewsRecord],
    threshold: f64,
    top_k: i64,
) -> RankedResults {
    let query = query.as_slice();
    let query_magnitude = Magnitude::of(query);
    let score = |record: &NewsRecord| score_candidate(query, query_magnitude, record);

    // Indexed collect keeps candidate order on both paths
    let scores: Vec<Option<f64>> = if candidates.len() >= PARALLEL_SCORING_MIN_CANDIDATES {
        candidates.par_iter().map(score).collect()
    } else {
        candidates.iter().map(score).collect()
    };

    let skipped = scores.iter().filter(|s| s.is_none()).count();

    let mut passing: Vec<(usize, f64)> = scores
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.map(|score| (i, score)))
        .filter(|&(_, score)| score >= threshold)
        .collect();
    let total_above_threshold = passing.len();

    // sort_by is stable: equal scores stay in candidate order
    passing.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    passing.truncate(usize::try_from(top_k).unwrap_or(0));

    let results = passing
        .into_iter()
        .map(|(i, score)| ScoredNews::from_record(&candidates[i], score))
        .collect();

    RankedResults {
        results,
        total_compared: candidates.len(),
        total_above_threshold,
        skipped,
    }
}

fn score_candidate(query: &[f64], query_magnitude: Magnitude, record: &NewsRecord) -> Option<f64> {
    let stored = EmbeddingVector::from_json(record.embedding.as_deref()?).ok()?;
    if stored.dimensions() != query.len() {
        return None;
    }

    let score = cosine_similarity_with_magnitude(query, stored.as_slice(), query_magnitude);
    score.is_finite().then_some(score)
}
