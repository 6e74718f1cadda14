// crates/gateway/src/state.rs
//! Shared state handed to every route handler.

use std::sync::Arc;
use std::time::Instant;

use crate::client::JobClient;

/// Shared gateway state.
///
/// Holds no mutable data: the job client is stateless apart from reqwest's
/// internal connection pool, so handlers share it without locking.
#[derive(Clone)]
pub struct GatewayState {
    /// Downstream job service client.
    pub jobs: Arc<dyn JobClient>,
    /// Process start time for uptime tracking.
    pub start_time: Instant,
}

impl GatewayState {
    pub fn new(jobs: Arc<dyn JobClient>) -> Self {
        Self {
            jobs,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
