//! HTTP API
//!
//! Rocket routes over the embedding and similarity use cases. Every body is
//! a JSON envelope: `{status: "success", message?, data}` or
//! `{status: "error", message, code}`.

pub mod cors;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

pub use routes::api_rocket;
