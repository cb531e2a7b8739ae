//! Job progress tracking
//!
//! Counters for one running job, shared between the batch tasks that update
//! them and the HTTP handlers that read them. All access goes through a
//! single mutex so readers always see a consistent `(total, remaining)` pair.

use parking_lot::Mutex;
use serde::Serialize;
use thiserror::Error;

/// Progress tracker contract violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressError {
    #[error("no job has been started")]
    NotStarted,

    #[error("cannot complete {requested} records, only {remaining} remaining")]
    Underflow { requested: usize, remaining: usize },
}

#[derive(Debug, Default)]
struct Counters {
    started: bool,
    total: usize,
    remaining: usize,
    failed_batches: usize,
    lost_records: usize,
}

/// Point-in-time copy of a job's counters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    pub total: usize,
    pub remaining: usize,
    pub completed: usize,
    pub failed_batches: usize,
    pub lost_records: usize,
    pub fraction: f64,
}

/// Completion counters for one job
#[derive(Debug, Default)]
pub struct JobProgress {
    inner: Mutex<Counters>,
}

impl JobProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset counters for a job expecting `total` records
    pub fn start(&self, total: usize) {
        let mut counters = self.inner.lock();
        *counters = Counters {
            started: true,
            total,
            remaining: total,
            ..Counters::default()
        };
    }

    /// Mark `n` records as persisted.
    ///
    /// Leaves the counters untouched and returns `Underflow` if `remaining`
    /// would drop below zero.
    pub fn record_completed(&self, n: usize) -> Result<(), ProgressError> {
        let mut counters = self.inner.lock();
        if !counters.started {
            return Err(ProgressError::NotStarted);
        }
        if n > counters.remaining {
            return Err(ProgressError::Underflow {
                requested: n,
                remaining: counters.remaining,
            });
        }
        counters.remaining -= n;
        Ok(())
    }

    /// Count a batch whose upstream call failed
    pub fn record_failed_batch(&self) {
        self.inner.lock().failed_batches += 1;
    }

    /// Count a fetched record that could not be persisted
    pub fn record_lost(&self) {
        self.inner.lock().lost_records += 1;
    }

    /// Completed share of the job in `[0, 1]`.
    ///
    /// A started job with nothing to do reports `1.0`.
    pub fn fraction(&self) -> Result<f64, ProgressError> {
        let counters = self.inner.lock();
        Self::fraction_of(&counters)
    }

    pub fn snapshot(&self) -> Result<ProgressSnapshot, ProgressError> {
        let counters = self.inner.lock();
        let fraction = Self::fraction_of(&counters)?;
        Ok(ProgressSnapshot {
            total: counters.total,
            remaining: counters.remaining,
            completed: counters.total - counters.remaining,
            failed_batches: counters.failed_batches,
            lost_records: counters.lost_records,
            fraction,
        })
    }

    fn fraction_of(counters: &Counters) -> Result<f64, ProgressError> {
        if !counters.started {
            return Err(ProgressError::NotStarted);
        }
        if counters.total == 0 {
            return Ok(1.0);
        }
        Ok((counters.total - counters.remaining) as f64 / counters.total as f64)
    }
}
