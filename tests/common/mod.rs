//! Common test utilities for weather-batch-rs

pub mod fixtures;
pub mod upstream;

pub use fixtures::{TestEnv, city_ids};
pub use upstream::{GroupResponder, StubUpstream};
