//! HTTP layer constants

/// Service name reported by the root endpoint
pub const SERVICE_NAME: &str = "NEWS-DB-VECTOR-API";

/// Root endpoint greeting
pub const WELCOME_MESSAGE: &str = "Welcome to NEWS-DB-VECTOR-API";

/// `status` field of a healthy `/health` response
pub const HEALTH_STATUS: &str = "healthy";

/// `message` field of a healthy `/health` response
pub const HEALTH_MESSAGE: &str = "Service is running";

/// `status` field of a success envelope
pub const STATUS_SUCCESS: &str = "success";

/// `status` field of an error envelope
pub const STATUS_ERROR: &str = "error";

/// `status` field of a failed connectivity check
pub const STATUS_FAILED: &str = "failed";

/// Storage connectivity check passed
pub const DB_OK_MESSAGE: &str = "Database connection is working";

/// Storage connectivity check failed
pub const DB_FAILED_MESSAGE: &str = "Database connection failed";

/// Single record embedded and stored
pub const EMBEDDING_SAVED_MESSAGE: &str = "Embedding created and saved successfully";

/// Similarity query against an empty corpus
pub const EMPTY_CORPUS_MESSAGE: &str = "No news with embeddings found in the database";

/// Context for failures of `POST /embedding`
pub const EMBED_TEXT_CONTEXT: &str = "Error generating embedding";

/// Context for failures of `POST /embedding-id`
pub const EMBED_RECORD_CONTEXT: &str = "Error creating news embedding";

/// Context for failures of `POST /embedding/batch/all`
pub const EMBED_BATCH_CONTEXT: &str = "Error batch creating embeddings";

/// Context for failures of `POST /similarity-compare`
pub const COMPARE_CONTEXT: &str = "Error comparing embeddings";
