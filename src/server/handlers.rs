//! HTTP route handlers
//!
//! This module provides HTTP route handler functions.

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::{debug, warn};

/// Health check endpoint handler
///
/// Reports `degraded` with 503 when the artifact directory is not writable.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let (status, mut response) = match state.storage.health_check().await {
        Ok(()) => ("healthy", HttpResponse::Ok()),
        Err(e) => {
            warn!(error = %e, "Storage health check failed");
            ("degraded", HttpResponse::ServiceUnavailable())
        }
    };

    response.json(json!({
        "status": status,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "job": state.orchestrator.state(),
    }))
}
