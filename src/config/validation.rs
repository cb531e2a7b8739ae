//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.

use super::models::*;
use crate::core::batch::MAX_BATCH_SIZE;
use tracing::debug;
use url::Url;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating gateway configuration");

        self.server.validate()?;
        self.upstream.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;

        debug!("Gateway configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if self.max_body_size == 0 {
            return Err("Max body size cannot be 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Worker count must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for UpstreamConfig {
    fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("Upstream base_url is not a valid URL: {}", e))?;
        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(format!(
                    "Upstream base_url must use http:// or https:// scheme, got: {}",
                    scheme
                ));
            }
        }

        if self.timeout_seconds == 0 {
            return Err("Upstream timeout must be greater than 0".to_string());
        }

        if self.max_batch_size == 0 || self.max_batch_size > MAX_BATCH_SIZE {
            return Err(format!(
                "Upstream max_batch_size must be between 1 and {}, got {}",
                MAX_BATCH_SIZE, self.max_batch_size
            ));
        }

        if self.units.is_empty() {
            return Err("Upstream units cannot be empty".to_string());
        }

        if self.max_concurrent_batches == Some(0) {
            return Err("max_concurrent_batches must be greater than 0".to_string());
        }

        self.parsed_timezone().map_err(|e| e.to_string())?;

        Ok(())
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.trim().is_empty() {
            return Err("Storage output_dir cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
