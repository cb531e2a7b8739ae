//! Batch processing for upstream-size-limited work
//!
//! This module splits identifier lists into upstream-sized batches and runs
//! one async operation per batch concurrently.

mod async_batch;
mod partition;
mod types;


// Re-export all public types
pub use async_batch::{
    AsyncBatchConfig, AsyncBatchExecutor, AsyncBatchItemResult, AsyncBatchSummary,
};
pub use partition::{MAX_BATCH_SIZE, partition};
pub use types::Batch;
