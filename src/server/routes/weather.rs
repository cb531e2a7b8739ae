//! Weather job endpoints
//!
//! `/getinfo` is the blocking interface: POST runs a job to
//! completion, GET reads the latest job's progress. `/v1/jobs` starts jobs
//! in the background and reports on them by id.

use crate::core::jobs::{JobId, JobState};
use crate::core::progress::ProgressSnapshot;
use crate::core::types::{ApiKey, CityId};
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Configure weather job routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/getinfo")
            .route(web::post().to(run_job))
            .route(web::get().to(get_progress)),
    )
    .service(
        web::scope("/v1/jobs")
            .route("", web::post().to(start_job))
            .route("/{job_id}", web::get().to(get_job)),
    );
}

/// Start-job payload
#[derive(Debug, Deserialize)]
pub struct StartJobRequest {
    /// Locations to collect, in order
    pub city_ids: Vec<CityId>,
    /// Upstream key, forwarded and recorded in each artifact
    pub api_key: ApiKey,
}

/// Latest job progress
#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub progress: f64,
}

/// Background job accepted
#[derive(Debug, Serialize)]
pub struct JobAccepted {
    pub job_id: JobId,
    pub status: JobState,
    pub total: usize,
    pub batches: usize,
}

/// Job status and counters
#[derive(Debug, Serialize)]
pub struct JobStatusResponse {
    pub job_id: JobId,
    pub status: JobState,
    pub started_at: DateTime<Utc>,
    pub progress: ProgressSnapshot,
    /// Wall-clock duration, once completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_seconds: Option<f64>,
}

/// Run a job to completion
/// POST /getinfo
pub async fn run_job(
    data: web::Data<AppState>,
    payload: web::Json<StartJobRequest>,
) -> Result<HttpResponse> {
    let StartJobRequest { city_ids, api_key } = payload.into_inner();
    info!(cities = city_ids.len(), api_key = %api_key, "Blocking job requested");

    let result = data
        .orchestrator
        .run_job_detached(city_ids, api_key)
        .await?;

    Ok(HttpResponse::Ok().json(result.time_taken_message()))
}

/// Progress of the most recently started job
/// GET /getinfo
pub async fn get_progress(data: web::Data<AppState>) -> Result<HttpResponse> {
    let progress = data.orchestrator.query_progress()?;
    Ok(HttpResponse::Ok().json(ProgressResponse { progress }))
}

/// Start a job in the background
/// POST /v1/jobs
pub async fn start_job(
    data: web::Data<AppState>,
    payload: web::Json<StartJobRequest>,
) -> Result<HttpResponse> {
    let StartJobRequest { city_ids, api_key } = payload.into_inner();
    info!(cities = city_ids.len(), api_key = %api_key, "Background job requested");

    let job = data.orchestrator.spawn_job(city_ids, api_key)?;

    Ok(HttpResponse::Accepted().json(JobAccepted {
        job_id: job.id,
        status: job.state(),
        total: job.total,
        batches: job.batches,
    }))
}

/// Status of a job by id
/// GET /v1/jobs/{job_id}
pub async fn get_job(
    data: web::Data<AppState>,
    path: web::Path<JobId>,
) -> Result<HttpResponse> {
    let job_id = path.into_inner();
    let job = data
        .orchestrator
        .job(job_id)
        .ok_or_else(|| GatewayError::not_found(format!("Job {} not found", job_id)))?;

    Ok(HttpResponse::Ok().json(JobStatusResponse {
        job_id: job.id,
        status: job.state(),
        started_at: job.started_at,
        progress: job.progress.snapshot()?,
        elapsed_seconds: job.result().map(|r| r.elapsed.as_secs_f64()),
    }))
}
