//! Main gateway configuration

#![allow(missing_docs)]

use super::*;
use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream API configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Artifact storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables on top of defaults
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment variables");

        let mut config = Self::default();

        // Server configuration
        if let Ok(host) = env::var("WEATHER_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env::var("WEATHER_PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid port: {}", e)))?;
        }
        if let Ok(workers) = env::var("WEATHER_WORKERS") {
            config.server.workers = Some(
                workers
                    .parse()
                    .map_err(|e| GatewayError::Config(format!("Invalid workers count: {}", e)))?,
            );
        }

        // Upstream configuration
        if let Ok(url) = env::var("WEATHER_UPSTREAM_URL") {
            config.upstream.base_url = url;
        }
        if let Ok(timeout) = env::var("WEATHER_UPSTREAM_TIMEOUT") {
            config.upstream.timeout_seconds = timeout
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid upstream timeout: {}", e)))?;
        }
        if let Ok(timezone) = env::var("WEATHER_TIMEZONE") {
            config.upstream.timezone = timezone;
        }

        // Storage configuration
        if let Ok(dir) = env::var("WEATHER_OUTPUT_DIR") {
            config.storage.output_dir = dir;
        }

        // Logging configuration
        if let Ok(level) = env::var("WEATHER_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Ok(json) = env::var("WEATHER_LOG_JSON") {
            config.logging.json = json
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid log json flag: {}", e)))?;
        }

        debug!("Configuration loaded from environment variables");
        Ok(config)
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.upstream = self.upstream.merge(other.upstream);
        self.storage = self.storage.merge(other.storage);
        self.logging = self.logging.merge(other.logging);
        self
    }
}
