// crates/gateway/src/client.rs
//! Typed client for the downstream job service.
//!
//! `JobClient` is the seam the route handlers depend on; `HttpJobClient` is the
//! reqwest-backed implementation bound to one base URL. The client carries no
//! policy of its own: no retries, no circuit breaking.

use std::time::Duration;

use async_trait::async_trait;
use job_gateway_types::{Job, JobResult, Jobs};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Downstream job service surface.
#[async_trait]
pub trait JobClient: Send + Sync {
    /// GET /jobs
    async fn get_jobs(&self) -> Result<Jobs, ClientError>;

    /// GET /jobs/{job_id}
    async fn get_job(&self, job_id: &str) -> Result<JobResult, ClientError>;

    /// POST /jobs (no body)
    async fn create_job(&self) -> Result<Job, ClientError>;
}

/// HTTP implementation of [`JobClient`].
#[derive(Debug, Clone)]
pub struct HttpJobClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpJobClient {
    /// Bind a client to `base_url`. `timeout` of `None` keeps reqwest's default.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        reqwest::Url::parse(base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Transport)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn jobs_url(&self) -> String {
        format!("{}/jobs", self.base_url)
    }

    fn job_url(&self, job_id: &str) -> String {
        format!("{}/jobs/{}", self.base_url, urlencoding::encode(job_id))
    }
}

#[async_trait]
impl JobClient for HttpJobClient {
    async fn get_jobs(&self) -> Result<Jobs, ClientError> {
        let resp = self
            .http
            .get(self.jobs_url())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(ClientError::from_send)?;
        read_json(resp).await
    }

    async fn get_job(&self, job_id: &str) -> Result<JobResult, ClientError> {
        let resp = self
            .http
            .get(self.job_url(job_id))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(ClientError::from_send)?;
        read_json(resp).await
    }

    async fn create_job(&self) -> Result<Job, ClientError> {
        let resp = self
            .http
            .post(self.jobs_url())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(ClientError::from_send)?;
        read_json(resp).await
    }
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(status = %status, error = %e, "Failed to read job service error body");
                String::new()
            }
        };
        return Err(ClientError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = resp.bytes().await.map_err(ClientError::from_send)?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}
