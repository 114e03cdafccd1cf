//! Server Initialization
//!
//! Loads configuration, installs logging, wires the application context and
//! launches Rocket on the configured address.

use std::path::Path;

use nvdb_infrastructure::config::ConfigLoader;
use nvdb_infrastructure::logging::{init_logging, log_config_loaded};
use nvdb_infrastructure::{AppContext, init_app};
use tracing::{info, warn};

use crate::api::api_rocket;
use crate::constants::SERVICE_NAME;

/// Run the news vector database server
pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let loader = config_loader(config_path);
    let config = loader.load()?;
    init_logging(&config.logging)?;
    log_config_loaded(loader.resolve_config_path().as_deref());

    info!(
        host = %config.server.host,
        port = config.server.port,
        api_prefix = %config.server.mount_path(),
        environment = %config.environment,
        "Starting {SERVICE_NAME}"
    );

    let context = init_app(config)?;
    check_storage(&context).await;

    launch(context).await
}

/// Configuration loader for an optional explicit path
fn config_loader(config_path: Option<&Path>) -> ConfigLoader {
    match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    }
}

/// Report storage connectivity without blocking start-up
async fn check_storage(context: &AppContext) {
    let repository = context.repository();
    match repository.health_check().await {
        Ok(()) => info!(repository = repository.provider_name(), "Storage reachable"),
        Err(e) => warn!(
            repository = repository.provider_name(),
            error = %e,
            "Storage unreachable at start-up"
        ),
    }
}

async fn launch(context: AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let figment = rocket::Config::figment()
        .merge(("address", context.config.server.host.clone()))
        .merge(("port", context.config.server.port));

    api_rocket(context).configure(figment).launch().await?;
    Ok(())
}
