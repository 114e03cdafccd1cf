//! Dependency wiring
//!
//! Providers are resolved by name from the linkme registries and injected
//! into the use cases through [`AppContext`].

pub mod bootstrap;
pub mod resolvers;

pub use bootstrap::{AppContext, init_app};
pub use resolvers::{resolve_embedding, resolve_repository};
