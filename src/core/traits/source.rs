//! Upstream weather source trait

use async_trait::async_trait;
use std::fmt::Debug;

use crate::core::batch::Batch;
use crate::core::types::{ApiKey, WeatherRecord};
use crate::core::weather::FetchError;

/// Anything that can resolve one batch of identifiers into records
///
/// Implementations perform exactly one upstream call per `fetch` and report
/// failure as a value; they never persist anything themselves.
///
/// # Example
///
/// ```rust,ignore
/// #[async_trait]
/// impl WeatherSource for FixedSource {
///     fn name(&self) -> &'static str {
///         "fixed"
///     }
///
///     async fn fetch(&self, batch: &Batch, _key: &ApiKey) -> Result<Vec<WeatherRecord>, FetchError> {
///         Ok(batch.ids.iter().map(|id| record_for(*id)).collect())
///     }
/// }
/// ```
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug + 'static {
    /// Short name used in log lines
    fn name(&self) -> &'static str;

    /// Fetch current readings for every identifier in `batch`.
    ///
    /// The upstream may return fewer records than identifiers requested.
    async fn fetch(
        &self,
        batch: &Batch,
        api_key: &ApiKey,
    ) -> Result<Vec<WeatherRecord>, FetchError>;
}
