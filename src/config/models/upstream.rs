//! Upstream API configuration

use super::*;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::utils::error::{GatewayError, Result};

/// Settings for the OpenWeatherMap group endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL; `/group` is appended
    #[serde(default = "default_upstream_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_upstream_timeout")]
    pub timeout_seconds: u64,
    /// Identifiers per upstream call, at most 20
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
    /// Unit system flag passed upstream
    #[serde(default = "default_units")]
    pub units: String,
    /// IANA name of the timezone used for capture timestamps
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Cap on simultaneously running batches; unset runs every batch at once
    #[serde(default)]
    pub max_concurrent_batches: Option<usize>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_url(),
            timeout_seconds: default_upstream_timeout(),
            max_batch_size: default_max_batch_size(),
            units: default_units(),
            timezone: default_timezone(),
            max_concurrent_batches: None,
        }
    }
}

impl UpstreamConfig {
    /// Merge upstream configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.base_url != default_upstream_url() {
            self.base_url = other.base_url;
        }
        if other.timeout_seconds != default_upstream_timeout() {
            self.timeout_seconds = other.timeout_seconds;
        }
        if other.max_batch_size != default_max_batch_size() {
            self.max_batch_size = other.max_batch_size;
        }
        if other.units != default_units() {
            self.units = other.units;
        }
        if other.timezone != default_timezone() {
            self.timezone = other.timezone;
        }
        if other.max_concurrent_batches.is_some() {
            self.max_concurrent_batches = other.max_concurrent_batches;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Resolve the configured timezone name
    pub fn parsed_timezone(&self) -> Result<Tz> {
        self.timezone.parse::<Tz>().map_err(|e| {
            GatewayError::Config(format!("Invalid timezone '{}': {}", self.timezone, e))
        })
    }
}
