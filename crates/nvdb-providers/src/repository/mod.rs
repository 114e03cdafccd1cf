//! News Repository Implementations
//!
//! | Repository | Backend | Use |
//! |------------|---------|-----|
//! | InMemoryNewsRepository | DashMap | Tests, demos |
//! | PostgresNewsRepository | PostgreSQL via r2d2 | Production |

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryNewsRepository;
pub use postgres::{PostgresConfig, PostgresNewsRepository};
