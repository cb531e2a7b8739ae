//! Weather measurement record

use super::CityId;
use chrono::DateTime;
use chrono_tz::Tz;

/// One identifier's measurement, captured at a point in time
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    /// Location the measurement belongs to
    pub city_id: CityId,
    /// Capture time in the configured reference timezone
    pub captured_at: DateTime<Tz>,
    /// Temperature in the requested unit system (Celsius for metric)
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
}
