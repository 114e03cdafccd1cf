//! Configuration types

mod app;
mod logging;
mod providers;
mod server;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use providers::{DatabaseConfig, EmbeddingConfig};
pub use server::ServerConfig;
