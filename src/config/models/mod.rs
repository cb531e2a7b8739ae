//! Configuration data models
//!
//! This module defines all configuration structures used throughout the service.

#![allow(missing_docs)]

pub mod gateway;
pub mod logging;
pub mod server;
pub mod storage;
pub mod upstream;

// Re-export all configuration types
pub use gateway::*;
pub use logging::*;
pub use server::*;
pub use storage::*;
pub use upstream::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    5000
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    10 * 1024 * 1024 // 10MB
}

/// Default upstream base URL
pub fn default_upstream_url() -> String {
    "http://api.openweathermap.org/data/2.5".to_string()
}

/// Default upstream request timeout in seconds
pub fn default_upstream_timeout() -> u64 {
    30
}

/// Default identifiers per upstream call
pub fn default_max_batch_size() -> usize {
    crate::core::batch::MAX_BATCH_SIZE
}

pub fn default_units() -> String {
    "metric".to_string()
}

/// Default reference timezone for capture timestamps
pub fn default_timezone() -> String {
    "America/Sao_Paulo".to_string()
}

/// Default artifact directory
pub fn default_output_dir() -> String {
    "data".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}
