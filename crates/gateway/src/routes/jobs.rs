// crates/gateway/src/routes/jobs.rs
//! Job routes, forwarded to the downstream job service.
//!
//! - GET /jobs - List jobs. Never fails: any downstream error yields `[]`.
//! - GET /jobs/{job_id} - Get one job. Downstream errors propagate.
//! - POST /jobs - Create a job. Downstream errors propagate.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use job_gateway_types::{Job, JobList, JobResult};

use crate::error::{ApiError, ApiResult};
use crate::state::GatewayState;

/// GET /jobs - List all jobs known to the job service.
async fn list_jobs(State(state): State<GatewayState>) -> Json<JobList> {
    match state.jobs.get_jobs().await {
        Ok(jobs) => {
            let list = JobList::from(jobs);
            if list.is_empty() {
                tracing::debug!("Job service has no jobs");
            }
            Json(list)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Job service list failed, responding with empty list");
            Json(JobList::default())
        }
    }
}

/// GET /jobs/{job_id} - The job service's result for one job, unchanged.
async fn get_job(
    State(state): State<GatewayState>,
    Path(job_id): Path<String>,
) -> ApiResult<Json<JobResult>> {
    let result = state.jobs.get_job(&job_id).await;
    match result {
        Ok(result) => {
            tracing::debug!(job_id = %job_id, status = ?result.status(), "Job fetched");
            Ok(Json(result))
        }
        Err(e) if e.is_not_found() => Err(ApiError::JobNotFound(job_id)),
        Err(e) => Err(e.into()),
    }
}

/// POST /jobs - Ask the job service to create a job. One call, no retry.
async fn create_job(State(state): State<GatewayState>) -> ApiResult<Json<Job>> {
    let job = state.jobs.create_job().await?;
    tracing::info!(job_id = %job.id, "Job created");
    Ok(Json(job))
}

/// Build the jobs router.
pub fn router() -> Router<GatewayState> {
    Router::new()
        .route("/jobs", get(list_jobs).post(create_job))
        .route("/jobs/{job_id}", get(get_job))
}
