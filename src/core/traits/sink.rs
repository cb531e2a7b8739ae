//! Record persistence trait

use async_trait::async_trait;
use std::fmt::Debug;
use std::path::PathBuf;

use crate::core::types::{ApiKey, WeatherRecord};
use crate::utils::error::Result;

/// Durable destination for fetched records, one artifact per record
#[async_trait]
pub trait RecordSink: Send + Sync + Debug + 'static {
    /// Persist `record` tagged with the key that fetched it.
    ///
    /// Returns the location of the written artifact. Must not silently
    /// replace an existing artifact.
    async fn persist(&self, record: &WeatherRecord, api_key: &ApiKey) -> Result<PathBuf>;
}
