//! Error Extension Tests

use std::error::Error as _;
use std::io;

use nvdb_domain::error::{Error, Result};
use nvdb_infrastructure::error_ext::ErrorContext;

fn io_failure() -> std::result::Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "file not found"))
}

#[test]
fn test_config_context_keeps_source() {
    let result: Result<()> = io_failure().config_context("failed to read nvdb.toml");

    match result {
        Err(err @ Error::Configuration { .. }) => {
            let text = err.to_string();
            assert!(text.contains("failed to read nvdb.toml"));
            assert!(text.contains("file not found"));
            assert!(err.source().is_some());
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}
