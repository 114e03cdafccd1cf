//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values.

use crate::config::AppConfig;
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use nvdb_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Prefixed environment variables (e.g. `NVDB_SERVER__PORT`)
    /// 4. Legacy variables: `DATABASE_URL`, `GEMINI_API_KEY`, `NODE_ENV`,
    ///    `STARTUP_API_PATH`
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = self.resolve_config_path().filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(config_path));
        }

        figment = figment
            .merge(Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR));
        figment = merge_legacy_env(figment)?;

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// File `load` reads: the explicit path, else the first default that exists
    ///
    /// An explicit path is returned even when the file is missing.
    pub fn resolve_config_path(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(Self::find_default_config_path)
    }

    /// First existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let mut candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(LOCAL_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
        }

        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-blank value of a legacy variable
fn legacy_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Apply the legacy variables on top of `figment`
///
/// `DATABASE_URL` and `GEMINI_API_KEY` also select the postgres and gemini
/// providers while the provider is still the built-in default.
fn merge_legacy_env(mut figment: Figment) -> Result<Figment> {
    if let Some(environment) = legacy_var(LEGACY_NODE_ENV) {
        figment = figment.merge(Serialized::default("environment", environment));
    }
    if let Some(prefix) = legacy_var(LEGACY_STARTUP_API_PATH) {
        figment = figment.merge(Serialized::default("server.api_prefix", prefix));
    }
    if let Some(api_key) = legacy_var(LEGACY_GEMINI_API_KEY) {
        if current_provider(&figment, "embedding.provider")? == DEFAULT_EMBEDDING_PROVIDER {
            figment = figment.merge(Serialized::default(
                "embedding.provider",
                GEMINI_EMBEDDING_PROVIDER,
            ));
        }
        figment = figment.merge(Serialized::default("embedding.api_key", api_key));
    }
    if let Some(url) = legacy_var(LEGACY_DATABASE_URL) {
        if current_provider(&figment, "database.provider")? == DEFAULT_DATABASE_PROVIDER {
            figment = figment.merge(Serialized::default(
                "database.provider",
                POSTGRES_DATABASE_PROVIDER,
            ));
        }
        figment = figment.merge(Serialized::default("database.url", url));
    }
    Ok(figment)
}

fn current_provider(figment: &Figment, key: &str) -> Result<String> {
    figment
        .extract_inner::<String>(key)
        .config_context(format!("Failed to read {key}"))
}

/// Validate application configuration
fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    parse_log_level(&config.logging.level)?;
    validate_embedding_config(config)?;
    validate_database_config(config)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    let prefix = &config.server.api_prefix;
    if !prefix.is_empty() && !prefix.starts_with('/') {
        return Err(Error::configuration(format!(
            "API prefix must be empty or start with '/', got '{prefix}'"
        )));
    }
    Ok(())
}

fn validate_embedding_config(config: &AppConfig) -> Result<()> {
    if config.embedding.provider == GEMINI_EMBEDDING_PROVIDER && !config.embedding.has_api_key() {
        return Err(Error::configuration(
            "Gemini embedding provider requires an API key (GEMINI_API_KEY)",
        ));
    }
    if config.embedding.dimensions == Some(0) {
        return Err(Error::configuration("Embedding dimensions cannot be 0"));
    }
    Ok(())
}

fn validate_database_config(config: &AppConfig) -> Result<()> {
    if config.database.provider == POSTGRES_DATABASE_PROVIDER && !config.database.is_configured() {
        return Err(Error::configuration(
            "Postgres repository requires a connection URL (DATABASE_URL)",
        ));
    }
    if config.database.max_connections == 0 {
        return Err(Error::configuration(
            "Database pool size must be at least 1",
        ));
    }
    Ok(())
}
