//! Configuration loading and the run_server entry point

use crate::config::Config;
use crate::utils::error::Result;
use crate::utils::logging::init_tracing;
use std::path::Path;
use tracing::info;

/// Load configuration: YAML file when present, defaults otherwise, then
/// `WEATHER_*` environment overrides on top.
///
/// Returns whether the file was found. A file that exists but fails to
/// parse or validate is an error.
pub async fn load_config(path: &Path) -> Result<(Config, bool)> {
    let from_file = path.exists();
    let base = if from_file {
        Config::from_file(path).await?
    } else {
        Config::default()
    };

    let config = base.merge(Config::from_env()?);
    config.validate()?;
    Ok((config, from_file))
}

/// Load configuration, install logging and serve until shutdown
pub async fn run_server(config_path: &Path) -> Result<()> {
    let (config, from_file) = load_config(config_path).await?;
    init_tracing(config.logging())?;

    if from_file {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        info!(
            "Configuration file {} not found, using defaults",
            config_path.display()
        );
    }

    info!(
        "Server starting at: http://{}",
        config.server().address()
    );
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /getinfo - Run a collection job to completion");
    info!("   GET  /getinfo - Progress of the latest job");
    info!("   POST /v1/jobs - Start a collection job in the background");
    info!("   GET  /v1/jobs/{{job_id}} - Job status");

    crate::Gateway::new(config).await?.run().await
}
