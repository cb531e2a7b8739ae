//! Core type definition module
//!
//! Identifiers, credentials, and measurement records shared by the fetch,
//! storage, and job layers.

pub mod ids;
pub mod record;

// Re-export all public types
pub use ids::{ApiKey, CityId};
pub use record::WeatherRecord;
