//! # News Vector Database Server
//!
//! HTTP transport for the news vector database: embeds news descriptions
//! through a configurable provider, stores the vectors and ranks stored
//! articles by cosine similarity against a query.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nvdb_server::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Defaults, ./nvdb.toml, NVDB_* and legacy variables
//!     run(None).await
//! }
//! ```

pub mod api;
pub mod constants;
pub mod init;

pub use init::run;
