//! Upstream response shapes
//!
//! Only the consumed fields are modelled; everything else in the payload is
//! ignored.

use crate::core::types::{CityId, WeatherRecord};
use chrono::DateTime;
use chrono_tz::Tz;
use serde::Deserialize;

/// Body of `GET /group`
#[derive(Debug, Clone, Deserialize)]
pub struct GroupResponse {
    pub list: Vec<CityWeather>,
}

/// One location entry of the group response
#[derive(Debug, Clone, Deserialize)]
pub struct CityWeather {
    pub id: CityId,
    pub main: MainReadings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub humidity: f64,
}

impl GroupResponse {
    /// Stamp every entry with the same capture time, keeping response order
    pub fn into_records(self, captured_at: DateTime<Tz>) -> Vec<WeatherRecord> {
        self.list
            .into_iter()
            .map(|city| WeatherRecord {
                city_id: city.id,
                captured_at,
                temperature: city.main.temp,
                humidity: city.main.humidity,
            })
            .collect()
    }
}
