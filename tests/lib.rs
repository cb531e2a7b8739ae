//! Test suite for weather-batch-rs
//!
//! ## Test Categories
//!
//! ### 1. Common Utilities (`common/`)
//! Shared test infrastructure:
//! - Stub OpenWeatherMap group endpoint
//! - Fixtures for identifiers and configuration
//!
//! ### 2. Integration Tests (`integration/`)
//! Full jobs through the real HTTP client, orchestrator and file storage,
//! with the upstream served by `wiremock`.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all tests
//! cargo test
//!
//! # Run only unit tests
//! cargo test --lib
//!
//! # Run integration tests
//! cargo test --test lib
//! ```

pub mod common;
pub mod integration;
