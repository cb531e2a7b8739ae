//! Async Batch Execution - Concurrent Per-Batch Processing
//!
//! Drives one future per batch with a concurrency cap. A failing batch is
//! recorded in its own result slot and never cancels its siblings.

use futures::stream::{self, StreamExt};
use std::time::{Duration, Instant};

/// Configuration for async batch processing
#[derive(Debug, Clone)]
pub struct AsyncBatchConfig {
    /// Maximum concurrently running batches (default: 10)
    pub concurrency: usize,
}

impl Default for AsyncBatchConfig {
    fn default() -> Self {
        Self { concurrency: 10 }
    }
}

impl AsyncBatchConfig {
    /// Create a new config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set concurrency limit
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}

/// Result of an individual item in a batch run
#[derive(Debug, Clone)]
pub struct AsyncBatchItemResult<R, E> {
    /// Index of the item in the original input
    pub index: usize,
    /// The result (Ok or Err)
    pub result: std::result::Result<R, E>,
    /// Time taken for this item
    pub duration: Duration,
}

/// Summary of batch execution
#[derive(Debug, Clone)]
pub struct AsyncBatchSummary {
    /// Total items processed
    pub total: usize,
    /// Successful items
    pub succeeded: usize,
    /// Failed items
    pub failed: usize,
    /// Wall-clock time for the whole run
    pub total_duration: Duration,
}

/// Async batch executor for concurrent processing
pub struct AsyncBatchExecutor {
    config: AsyncBatchConfig,
}

impl AsyncBatchExecutor {
    /// Create a new batch executor
    pub fn new(config: AsyncBatchConfig) -> Self {
        Self { config }
    }

    /// Execute an async operation for every item concurrently
    ///
    /// # Returns
    /// One result per input item, sorted by input index
    ///
    /// # Example
    /// ```rust,ignore
    /// let executor = AsyncBatchExecutor::new(AsyncBatchConfig::new().with_concurrency(5));
    /// let results = executor
    ///     .execute(batches, |batch| async move { source.fetch(&batch, &key).await })
    ///     .await;
    /// ```
    pub async fn execute<T, R, E, F, Fut>(
        &self,
        items: impl IntoIterator<Item = T>,
        operation: F,
    ) -> Vec<AsyncBatchItemResult<R, E>>
    where
        F: Fn(T) -> Fut,
        Fut: std::future::Future<Output = std::result::Result<R, E>>,
    {
        let concurrency = self.config.concurrency.max(1);

        let mut results: Vec<AsyncBatchItemResult<R, E>> =
            stream::iter(items.into_iter().enumerate())
                .map(|(index, item)| {
                    let fut = operation(item);
                    async move {
                        let start = Instant::now();
                        let result = fut.await;
                        AsyncBatchItemResult {
                            index,
                            result,
                            duration: start.elapsed(),
                        }
                    }
                })
                .buffer_unordered(concurrency)
                .collect()
                .await;

        // Completion order is arbitrary; restore input order
        results.sort_by_key(|r| r.index);
        results
    }

    /// Execute with summary statistics
    pub async fn execute_with_summary<T, R, E, F, Fut>(
        &self,
        items: impl IntoIterator<Item = T>,
        operation: F,
    ) -> (Vec<AsyncBatchItemResult<R, E>>, AsyncBatchSummary)
    where
        F: Fn(T) -> Fut,
        Fut: std::future::Future<Output = std::result::Result<R, E>>,
    {
        let start = Instant::now();
        let results = self.execute(items, operation).await;
        let total_duration = start.elapsed();

        let total = results.len();
        let succeeded = results.iter().filter(|r| r.result.is_ok()).count();

        let summary = AsyncBatchSummary {
            total,
            succeeded,
            failed: total - succeeded,
            total_duration,
        };

        (results, summary)
    }
}

impl Default for AsyncBatchExecutor {
    fn default() -> Self {
        Self::new(AsyncBatchConfig::default())
    }
}
