//! HTTP client for the group endpoint

use async_trait::async_trait;
use chrono::Utc;
use chrono_tz::Tz;
use tracing::debug;

use super::error::FetchError;
use super::types::GroupResponse;
use crate::config::UpstreamConfig;
use crate::core::batch::Batch;
use crate::core::traits::WeatherSource;
use crate::core::types::{ApiKey, WeatherRecord};
use crate::utils::error::Result;
use crate::utils::truncate_string;

/// Longest upstream error body kept in a `FetchError`
const MAX_ERROR_BODY: usize = 256;

/// OpenWeatherMap client bound to one base URL, unit system and timezone
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    units: String,
    timezone: Tz,
}

impl OpenWeatherClient {
    /// Build a client from upstream configuration
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            units: config.units.clone(),
            timezone: config.parsed_timezone()?,
        })
    }

    /// Full URL of the group endpoint
    pub fn group_url(&self) -> String {
        format!("{}/group", self.base_url)
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    fn name(&self) -> &'static str {
        "openweathermap"
    }

    async fn fetch(
        &self,
        batch: &Batch,
        api_key: &ApiKey,
    ) -> std::result::Result<Vec<WeatherRecord>, FetchError> {
        debug!(
            batch = batch.index,
            size = batch.len(),
            "Requesting group weather"
        );

        let ids = batch.joined_ids();
        let response = self
            .http
            .get(self.group_url())
            .query(&[
                ("id", ids.as_str()),
                ("appid", api_key.expose()),
                ("units", self.units.as_str()),
            ])
            .send()
            .await
            .map_err(FetchError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate_string(&body, MAX_ERROR_BODY),
            });
        }

        let bytes = response.bytes().await.map_err(FetchError::from_transport)?;
        let payload: GroupResponse =
            serde_json::from_slice(&bytes).map_err(|e| FetchError::Parse(e.to_string()))?;

        let captured_at = Utc::now().with_timezone(&self.timezone);
        let records = payload.into_records(captured_at);

        debug!(
            batch = batch.index,
            requested = batch.len(),
            returned = records.len(),
            "Group weather received"
        );
        Ok(records)
    }
}
