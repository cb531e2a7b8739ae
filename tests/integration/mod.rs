//! Integration tests for weather-batch-rs
//!
//! These tests run whole jobs through the real HTTP client, orchestrator
//! and file storage; only the upstream is stubbed.

pub mod config_loading_tests;
pub mod job_pipeline_tests;
