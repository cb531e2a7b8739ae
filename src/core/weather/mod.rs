//! OpenWeatherMap group endpoint client
//!
//! The fetch worker of a job: one HTTP call per batch, parsed into
//! per-city records.

mod client;
mod error;
mod types;

#[cfg(test)]
mod tests;

pub use client::OpenWeatherClient;
pub use error::FetchError;
pub use types::{CityWeather, GroupResponse, MainReadings};
