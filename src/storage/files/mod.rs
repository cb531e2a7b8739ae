//! File storage implementation
//!
//! One JSON artifact per weather record on the local file system.

mod local;
mod types;

// Re-export public types
pub use local::LocalStorage;
pub use types::{StoredMeasurements, StoredRecord};
