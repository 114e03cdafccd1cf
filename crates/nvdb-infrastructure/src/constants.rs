//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `nvdb_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "nvdb.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "nvdb";

/// Project-local configuration directory
pub const LOCAL_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "NVDB";

/// Separator for nested keys in environment variables (`NVDB_SERVER__PORT`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Default deployment environment name
pub const DEFAULT_ENVIRONMENT: &str = "development";

// ============================================================================
// LEGACY ENVIRONMENT VARIABLES
// ============================================================================

/// Database connection URL
pub const LEGACY_DATABASE_URL: &str = "DATABASE_URL";

/// Gemini API key
pub const LEGACY_GEMINI_API_KEY: &str = "GEMINI_API_KEY";

/// Deployment environment name
pub const LEGACY_NODE_ENV: &str = "NODE_ENV";

/// Route prefix for the HTTP API
pub const LEGACY_STARTUP_API_PATH: &str = "STARTUP_API_PATH";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default HTTP bind address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8000;

// ============================================================================
// PROVIDER CONSTANTS
// ============================================================================

/// Embedding provider used when none is configured
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "null";

/// Embedding provider selected by the legacy API key variable
pub const GEMINI_EMBEDDING_PROVIDER: &str = "gemini";

/// Default embedding request timeout in seconds
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 30;

/// News repository used when none is configured
pub const DEFAULT_DATABASE_PROVIDER: &str = "memory";

/// News repository selected by the legacy database URL variable
pub const POSTGRES_DATABASE_PROVIDER: &str = "postgres";

/// Default connection pool size
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Default pool checkout timeout in seconds
pub const DEFAULT_DB_CONNECTION_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "NVDB_LOG";
