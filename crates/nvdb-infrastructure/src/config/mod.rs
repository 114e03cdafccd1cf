//! Application configuration
//!
//! [`AppConfig`] is built once at start-up by [`ConfigLoader`] and passed
//! explicitly to the components that need it.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DatabaseConfig, EmbeddingConfig, LoggingConfig, ServerConfig};
