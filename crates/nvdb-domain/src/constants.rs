//! Domain layer constants
//!
//! Defaults and limits that belong to the business rules. Provider and
//! infrastructure constants live in their own crates.

// ============================================================================
// SIMILARITY DOMAIN CONSTANTS
// ============================================================================

/// Minimum similarity score for a candidate when the caller gives none
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.9;

/// Number of ranked results returned when the caller gives no `top_k`
pub const DEFAULT_TOP_K: i64 = 1;

/// Corpus size from which candidate scoring runs on the rayon pool
pub const PARALLEL_SCORING_MIN_CANDIDATES: usize = 2048;

/// Label reported with comparison results
pub const SIMILARITY_METHOD_BRUTE_FORCE: &str = "brute_force_cosine";

/// Decimal places kept when scores are echoed to callers
pub const SCORE_DISPLAY_DECIMALS: i32 = 4;

// ============================================================================
// EMBEDDING GENERATION CONSTANTS
// ============================================================================

/// Maximum characters of a description echoed back in responses
pub const DESCRIPTION_PREVIEW_CHARS: usize = 200;

/// Marker appended to truncated description previews
pub const PREVIEW_ELLIPSIS: &str = "...";

/// Maximum number of per-record failures reported by a batch run
pub const MAX_REPORTED_FAILURES: usize = 10;

/// Failure reason recorded for pending records whose text is blank
pub const EMPTY_DESCRIPTION_REASON: &str = "Empty news_desc";

/// Failure reason recorded when a record disappears before the batch commit
pub const RECORD_VANISHED_REASON: &str = "News item was deleted before the embedding was saved";
