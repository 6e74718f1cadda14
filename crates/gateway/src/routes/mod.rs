//! Route handlers for the job gateway.

pub mod health;
pub mod jobs;

use axum::Router;

use crate::state::GatewayState;

/// Create the combined router.
///
/// Routes:
/// - GET /health - Liveness check
/// - GET /jobs - List jobs (empty list if the job service fails)
/// - POST /jobs - Create a job
/// - GET /jobs/{job_id} - Get one job
pub fn api_routes(state: GatewayState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(jobs::router())
        .with_state(state)
}
