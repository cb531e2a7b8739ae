//! Test fixtures
//!
//! Builds real clients, storage and orchestrators against a stub upstream.

use std::sync::Arc;
use tempfile::TempDir;
use weather_batch::config::UpstreamConfig;
use weather_batch::{CityId, JobOrchestrator, LocalStorage, OpenWeatherClient};

use super::upstream::StubUpstream;

/// Identifiers `first..=last`
pub fn city_ids(first: u64, last: u64) -> Vec<CityId> {
    (first..=last).map(CityId).collect()
}

/// Orchestrator wired to the stub upstream and a temporary artifact directory
pub struct TestEnv {
    pub dir: TempDir,
    pub storage: Arc<LocalStorage>,
    pub orchestrator: Arc<JobOrchestrator>,
}

impl TestEnv {
    pub async fn new(upstream: &StubUpstream) -> Self {
        let config = UpstreamConfig {
            base_url: upstream.base_url(),
            timeout_seconds: 5,
            ..UpstreamConfig::default()
        };
        Self::with_config(&config).await
    }

    pub async fn with_config(config: &UpstreamConfig) -> Self {
        let dir = TempDir::new().expect("temp dir");
        let storage = Arc::new(LocalStorage::new(dir.path()).await.expect("storage"));
        let source = Arc::new(OpenWeatherClient::new(config).expect("client"));
        let orchestrator = Arc::new(JobOrchestrator::new(source, storage.clone(), config));
        Self {
            dir,
            storage,
            orchestrator,
        }
    }

    /// Artifact file names written so far
    pub async fn artifacts(&self) -> Vec<String> {
        self.storage.list().await.expect("list artifacts")
    }
}
