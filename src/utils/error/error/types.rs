//! Core error type definitions

use crate::core::progress::ProgressError;
use crate::core::weather::FetchError;
use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Precondition violations such as a zero batch size
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed request payloads
    #[error("Validation error: {0}")]
    Validation(String),

    /// One upstream batch call failed
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Progress tracker contract violations
    #[error("Progress error: {0}")]
    Progress(#[from] ProgressError),

    /// Artifact persistence errors
    #[error("File storage error: {0}")]
    FileStorage(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflict errors
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
