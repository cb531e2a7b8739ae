//! Job types

use crate::core::progress::JobProgress;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

/// Job identifier
pub type JobId = Uuid;

/// Lifecycle of the orchestrator's job slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    Idle,
    Running,
    Completed,
}

/// Outcome of one successfully fetched batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Identifiers sent upstream
    pub requested: usize,
    /// Records the upstream returned
    pub returned: usize,
    /// Records written to the sink
    pub persisted: usize,
    /// Records the sink rejected
    pub lost: usize,
}

/// Terminal summary of one job run
#[derive(Debug, Clone, PartialEq)]
pub struct JobResult {
    pub job_id: JobId,
    /// Wall-clock time from job start until the last batch finished
    pub elapsed: Duration,
    pub batches: usize,
    pub failed_batches: usize,
    pub persisted: usize,
    pub lost_records: usize,
}

impl JobResult {
    /// Human-readable elapsed time, as returned by the blocking start route
    pub fn time_taken_message(&self) -> String {
        format!("Time Taken: {} seconds", self.elapsed.as_secs_f64())
    }
}

/// Shared view of one job: identity, counters, and final result once done
#[derive(Debug)]
pub struct JobHandle {
    pub id: JobId,
    pub started_at: DateTime<Utc>,
    /// Identifiers submitted
    pub total: usize,
    /// Batches the identifiers were split into
    pub batches: usize,
    pub progress: JobProgress,
    outcome: Mutex<Option<JobResult>>,
}

impl JobHandle {
    /// New handle with progress already started for `total` records
    pub(crate) fn start(total: usize, batches: usize) -> Self {
        let progress = JobProgress::new();
        progress.start(total);
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            total,
            batches,
            progress,
            outcome: Mutex::new(None),
        }
    }

    pub fn state(&self) -> JobState {
        if self.outcome.lock().is_some() {
            JobState::Completed
        } else {
            JobState::Running
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == JobState::Running
    }

    /// Final result, once every batch has finished
    pub fn result(&self) -> Option<JobResult> {
        self.outcome.lock().clone()
    }

    pub(crate) fn complete(&self, result: JobResult) {
        *self.outcome.lock() = Some(result);
    }
}
