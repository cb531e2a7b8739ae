//! Storage layer for the weather gateway
//!
//! This module provides artifact persistence for fetched records.

/// File storage module
pub mod files;

pub use files::{LocalStorage, StoredMeasurements, StoredRecord};
