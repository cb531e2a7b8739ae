//! Job orchestration
//!
//! Splits identifiers into batches, runs one fetch per batch concurrently,
//! drains each batch's records into the sink and keeps the job's progress
//! counters current. A failing batch is logged and counted; it never stops
//! its siblings.

use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{Instrument, error, info, info_span, warn};

use super::types::{BatchReport, JobHandle, JobId, JobResult, JobState};
use crate::config::UpstreamConfig;
use crate::core::batch::{AsyncBatchConfig, AsyncBatchExecutor, Batch, partition};
use crate::core::progress::ProgressError;
use crate::core::traits::{RecordSink, WeatherSource};
use crate::core::types::{ApiKey, CityId};
use crate::core::weather::FetchError;
use crate::utils::error::{GatewayError, Result};

/// Runs weather collection jobs, one at a time
#[derive(Debug)]
pub struct JobOrchestrator {
    source: Arc<dyn WeatherSource>,
    sink: Arc<dyn RecordSink>,
    max_batch_size: usize,
    max_concurrent_batches: Option<usize>,
    current: Mutex<Option<Arc<JobHandle>>>,
}

impl JobOrchestrator {
    pub fn new(
        source: Arc<dyn WeatherSource>,
        sink: Arc<dyn RecordSink>,
        config: &UpstreamConfig,
    ) -> Self {
        Self {
            source,
            sink,
            max_batch_size: config.max_batch_size,
            max_concurrent_batches: config.max_concurrent_batches,
            current: Mutex::new(None),
        }
    }

    /// Run a job to completion and return its summary.
    ///
    /// Fails without starting anything if the batch size is invalid or
    /// another job is still running. Dropping the returned future cancels
    /// the outstanding batches and completes the job with what it reached.
    pub async fn run_job(&self, ids: Vec<CityId>, api_key: ApiKey) -> Result<JobResult> {
        let started = Instant::now();
        let (job, batches) = self.begin(&ids)?;
        let _guard = AbandonGuard {
            job: &job,
            started,
        };

        let span = info_span!("job", job_id = %job.id);
        Ok(self
            .drive(&job, batches, &api_key, started)
            .instrument(span)
            .await)
    }

    /// Start a job on a background task and return its handle immediately
    pub fn spawn_job(self: &Arc<Self>, ids: Vec<CityId>, api_key: ApiKey) -> Result<Arc<JobHandle>> {
        let (job, _task) = self.launch(ids, api_key)?;
        Ok(job)
    }

    /// Run a job on a background task and wait for its summary.
    ///
    /// Dropping the returned future does not cancel the job.
    pub async fn run_job_detached(
        self: &Arc<Self>,
        ids: Vec<CityId>,
        api_key: ApiKey,
    ) -> Result<JobResult> {
        let (_job, task) = self.launch(ids, api_key)?;
        task.await
            .map_err(|e| GatewayError::internal(format!("Job task failed: {}", e)))
    }

    /// Completion fraction of the most recently started job
    pub fn query_progress(&self) -> Result<f64> {
        let job = self.current_job().ok_or(ProgressError::NotStarted)?;
        Ok(job.progress.fraction()?)
    }

    /// Most recently started job, running or completed
    pub fn current_job(&self) -> Option<Arc<JobHandle>> {
        self.current.lock().clone()
    }

    /// Look up a job by id; only the most recent job is retained
    pub fn job(&self, id: JobId) -> Option<Arc<JobHandle>> {
        self.current_job().filter(|job| job.id == id)
    }

    pub fn state(&self) -> JobState {
        self.current_job()
            .map(|job| job.state())
            .unwrap_or(JobState::Idle)
    }

    fn launch(
        self: &Arc<Self>,
        ids: Vec<CityId>,
        api_key: ApiKey,
    ) -> Result<(Arc<JobHandle>, JoinHandle<JobResult>)> {
        let started = Instant::now();
        let (job, batches) = self.begin(&ids)?;

        let orchestrator = Arc::clone(self);
        let task_job = Arc::clone(&job);
        let span = info_span!("job", job_id = %job.id);
        let task = tokio::spawn(
            async move {
                orchestrator
                    .drive(&task_job, batches, &api_key, started)
                    .await
            }
            .instrument(span),
        );

        Ok((job, task))
    }

    /// Partition and claim the job slot
    fn begin(&self, ids: &[CityId]) -> Result<(Arc<JobHandle>, Vec<Batch>)> {
        let batches = partition(ids, self.max_batch_size)?;

        let mut current = self.current.lock();
        if let Some(running) = current.as_ref().filter(|job| job.is_running()) {
            return Err(GatewayError::conflict(format!(
                "job {} is still running",
                running.id
            )));
        }

        let job = Arc::new(JobHandle::start(ids.len(), batches.len()));
        *current = Some(Arc::clone(&job));
        drop(current);

        info!(
            job_id = %job.id,
            cities = ids.len(),
            batches = batches.len(),
            "Job started"
        );
        Ok((job, batches))
    }

    async fn drive(
        &self,
        job: &JobHandle,
        batches: Vec<Batch>,
        api_key: &ApiKey,
        started: Instant,
    ) -> JobResult {
        let concurrency = self.max_concurrent_batches.unwrap_or(batches.len());
        let executor =
            AsyncBatchExecutor::new(AsyncBatchConfig::new().with_concurrency(concurrency));

        let (results, summary) = executor
            .execute_with_summary(batches, |batch| self.process_batch(job, batch, api_key))
            .await;

        let reports = results.iter().filter_map(|r| r.result.as_ref().ok());
        let (persisted, lost_records) = reports.fold((0, 0), |(persisted, lost), report| {
            (persisted + report.persisted, lost + report.lost)
        });

        let result = JobResult {
            job_id: job.id,
            elapsed: started.elapsed(),
            batches: summary.total,
            failed_batches: summary.failed,
            persisted,
            lost_records,
        };
        job.complete(result.clone());

        info!(
            batches = result.batches,
            failed_batches = result.failed_batches,
            persisted = result.persisted,
            lost_records = result.lost_records,
            elapsed_ms = result.elapsed.as_millis() as u64,
            "Job completed"
        );
        result
    }

    /// Fetch one batch and persist its records in response order
    async fn process_batch(
        &self,
        job: &JobHandle,
        batch: Batch,
        api_key: &ApiKey,
    ) -> std::result::Result<BatchReport, FetchError> {
        let records = match self.source.fetch(&batch, api_key).await {
            Ok(records) => records,
            Err(e) => {
                // The batch's identifiers stay uncounted for this job
                warn!(
                    source = self.source.name(),
                    batch = batch.index,
                    size = batch.len(),
                    kind = e.kind(),
                    status = ?e.status_code(),
                    error = %e,
                    "Batch fetch failed"
                );
                job.progress.record_failed_batch();
                return Err(e);
            }
        };

        let mut report = BatchReport {
            requested: batch.len(),
            returned: records.len(),
            ..BatchReport::default()
        };

        for record in &records {
            match self.sink.persist(record, api_key).await {
                Ok(_) => {
                    report.persisted += 1;
                    if let Err(e) = job.progress.record_completed(1) {
                        error!(
                            batch = batch.index,
                            city_id = %record.city_id,
                            error = %e,
                            "Progress accounting out of range"
                        );
                    }
                }
                Err(e) => {
                    report.lost += 1;
                    job.progress.record_lost();
                    warn!(
                        batch = batch.index,
                        city_id = %record.city_id,
                        error = %e,
                        "Failed to persist record"
                    );
                }
            }
        }

        if report.returned < report.requested {
            info!(
                batch = batch.index,
                requested = report.requested,
                returned = report.returned,
                "Upstream returned fewer records than requested"
            );
        }

        Ok(report)
    }
}

/// Completes a job whose inline future was dropped before it finished
struct AbandonGuard<'a> {
    job: &'a JobHandle,
    started: Instant,
}

impl Drop for AbandonGuard<'_> {
    fn drop(&mut self) {
        if !self.job.is_running() {
            return;
        }

        let snapshot = self.job.progress.snapshot().ok();
        let result = JobResult {
            job_id: self.job.id,
            elapsed: self.started.elapsed(),
            batches: self.job.batches,
            failed_batches: snapshot.as_ref().map_or(0, |s| s.failed_batches),
            persisted: snapshot.as_ref().map_or(0, |s| s.completed),
            lost_records: snapshot.as_ref().map_or(0, |s| s.lost_records),
        };
        warn!(
            job_id = %self.job.id,
            persisted = result.persisted,
            "Job abandoned before completion"
        );
        self.job.complete(result);
    }
}
