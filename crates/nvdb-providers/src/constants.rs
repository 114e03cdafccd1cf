//! Provider constants

use std::time::Duration;

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Null provider embedding dimension (matches text-embedding-004)
pub const EMBEDDING_DIMENSION_NULL: usize = 768;

/// Gemini text-embedding-004 dimension
pub const EMBEDDING_DIMENSION_GEMINI: usize = 768;

// ============================================================================
// GEMINI API CONSTANTS
// ============================================================================

/// Generative Language API endpoint
pub const GEMINI_DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default embedding model
pub const GEMINI_DEFAULT_MODEL: &str = "models/text-embedding-004";

/// Maximum requests per batchEmbedContents call
pub const GEMINI_MAX_BATCH_SIZE: usize = 100;

/// Header carrying the API key
pub const GEMINI_API_KEY_HEADER: &str = "x-goog-api-key";

/// Default timeout for embedding API requests
pub const DEFAULT_EMBEDDING_TIMEOUT: Duration = Duration::from_secs(30);

/// Content type for JSON requests
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

// ============================================================================
// DATABASE CONSTANTS
// ============================================================================

/// Table holding news records
pub const NEWS_TABLE: &str = "news";

/// Default maximum pooled connections
pub const DB_MAX_CONNECTIONS: u32 = 5;

/// Default wait for a pooled connection
pub const DB_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);
