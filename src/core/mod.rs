//! Core functionality for the weather gateway
//!
//! This module contains the batching, fetching, progress and job logic.

pub mod batch;
pub mod jobs;
pub mod progress;
pub mod traits;
pub mod types;
pub mod weather;

pub use jobs::{JobHandle, JobOrchestrator, JobResult, JobState};
pub use progress::{JobProgress, ProgressError, ProgressSnapshot};
