//! Persisted artifact layout
//!
//! Field order is alphabetical at every level so the serialized keys come
//! out sorted.

use crate::core::types::{ApiKey, CityId, WeatherRecord};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

/// Body of one `{city_id}_{timestamp}.json` artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Measured values
    pub data: StoredMeasurements,
    /// Capture time, RFC 3339 with the reference timezone offset
    pub datetime: String,
    /// API key the record was fetched with
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredMeasurements {
    pub city_id: CityId,
    pub humidity: f64,
    pub temperature: f64,
}

impl StoredRecord {
    pub fn new(record: &WeatherRecord, api_key: &ApiKey) -> Self {
        Self {
            data: StoredMeasurements {
                city_id: record.city_id,
                humidity: record.humidity,
                temperature: record.temperature,
            },
            datetime: record
                .captured_at
                .to_rfc3339_opts(SecondsFormat::Micros, false),
            user_id: api_key.expose().to_string(),
        }
    }
}
