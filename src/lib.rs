//! # weather-batch-rs
//!
//! Batched, concurrent collection of current weather readings from the
//! OpenWeatherMap group endpoint, with live job progress.
//!
//! ## Features
//!
//! - **Batching**: identifiers are split into groups of at most 20, the
//!   upstream's per-request limit
//! - **Concurrency**: every batch of a job is in flight at once
//! - **Progress**: the latest job's completion fraction is readable while it runs
//! - **Artifacts**: one JSON file per city reading, never overwritten
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use weather_batch::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     let gateway = Gateway::new(config).await?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Library Mode
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use weather_batch::{ApiKey, CityId, JobOrchestrator, LocalStorage, OpenWeatherClient};
//! use weather_batch::config::UpstreamConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let upstream = UpstreamConfig::default();
//!     let source = Arc::new(OpenWeatherClient::new(&upstream)?);
//!     let sink = Arc::new(LocalStorage::new("data").await?);
//!     let orchestrator = JobOrchestrator::new(source, sink, &upstream);
//!
//!     let ids = vec![CityId(3448439), CityId(3469058)];
//!     let result = orchestrator.run_job(ids, ApiKey::new("your-key")).await?;
//!     println!("{}", result.time_taken_message());
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

pub use core::batch::{Batch, MAX_BATCH_SIZE, partition};
pub use core::jobs::{JobHandle, JobOrchestrator, JobResult, JobState};
pub use core::progress::{JobProgress, ProgressError, ProgressSnapshot};
pub use core::traits::{RecordSink, WeatherSource};
pub use core::types::{ApiKey, CityId, WeatherRecord};
pub use core::weather::{FetchError, OpenWeatherClient};
pub use storage::LocalStorage;

use tracing::info;

/// The weather collection service
pub struct Gateway {
    config: Config,
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::HttpServer::new(&config).await?;

        Ok(Self { config, server })
    }

    /// Run the gateway server
    pub async fn run(self) -> Result<()> {
        info!("Starting weather gateway");
        info!("Configuration: {:#?}", self.config);

        self.server.start().await?;

        Ok(())
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time, seconds since the Unix epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
