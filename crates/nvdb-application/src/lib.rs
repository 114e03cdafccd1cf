//! Application Layer - News Vector Database
//!
//! Use cases and port definitions of the news vector database, following
//! Clean Architecture principles.
//!
//! ## Architecture
//!
//! The application layer:
//! - Defines ports for external dependencies (embedding providers)
//! - Declares the linkme registries providers self-register into
//! - Orchestrates domain entities, the storage port and the similarity engine
//! - Has no dependencies on infrastructure or transport frameworks
//!
//! ## Use Cases
//!
//! - Similarity comparison of a text or vector against stored embeddings
//! - Embedding generation for free text, one record, or every pending record
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `nvdb-domain`: For entities, value objects, the storage port and the engine
//! - Pure Rust libraries for async, serialization, etc.

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
