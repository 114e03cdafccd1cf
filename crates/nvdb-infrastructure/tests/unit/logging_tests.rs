//! Logging Tests

use nvdb_infrastructure::constants::DEFAULT_LOG_LEVEL;
use nvdb_infrastructure::logging::{
    LoggingConfig, init_logging, log_config_loaded, parse_log_level,
};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);

    assert!(parse_log_level("invalid").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
}

#[test]
fn test_init_logging_installs_once() {
    let config = LoggingConfig {
        level: "debug".to_string(),
        json_format: true,
    };

    assert!(init_logging(&config).is_ok());
    assert!(init_logging(&config).is_err());
}

#[test]
fn test_init_logging_rejects_unknown_level() {
    let config = LoggingConfig {
        level: "loud".to_string(),
        json_format: false,
    };

    assert!(init_logging(&config).is_err());
}

#[test]
fn test_log_config_loaded_accepts_every_source() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let present = temp_dir.path().join("nvdb.toml");
    std::fs::write(&present, "").unwrap();

    log_config_loaded(Some(&present));
    log_config_loaded(Some(&temp_dir.path().join("absent.toml")));
    log_config_loaded(None);
}
