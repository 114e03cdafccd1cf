//! Repository Interfaces
//!
//! Storage ports implemented by the provider crate.
//!
//! | Repository | Description |
//! |------------|-------------|
//! | [`NewsRepository`] | Lookup and embedding persistence for news records |

/// News record repository interface
pub mod news_repository;

pub use news_repository::NewsRepository;
