//! Error handling for the weather gateway
//!
//! This module defines the error types used throughout the service.

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod response;
mod types;

// Re-export all public types
pub use response::{ErrorDetail, ErrorResponse};
pub use types::{GatewayError, Result};
