// crates/types/src/lib.rs
//! Wire types shared by the job gateway and its downstream client.
//!
//! `Jobs` is what the job service sends for its list route (`{"results": [...]}`),
//! `JobList` is what the gateway hands back to its own callers (a bare array).
//! Fields the gateway does not know about are kept in `extra` so a downstream
//! payload survives the round trip unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A job as returned by the job service when it is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Identifier assigned by the job service.
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Job {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extra: Map::new(),
        }
    }
}

/// Current status (and result, once finished) of a single job.
///
/// Only `id` is typed. `status`, `result` and anything else the job service
/// sends stay as raw JSON in `extra`, so nulls and non-string statuses come
/// back out exactly as they went in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResult {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobResult {
    pub fn new(id: impl Into<String>, status: impl Into<String>) -> Self {
        let mut extra = Map::new();
        extra.insert("status".to_string(), Value::String(status.into()));
        Self {
            id: id.into(),
            extra,
        }
    }

    pub fn status(&self) -> Option<&Value> {
        self.extra.get("status")
    }
}

/// Downstream list shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Jobs {
    #[serde(default)]
    pub results: Vec<JobResult>,
}

/// Gateway list shape: serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobList(pub Vec<JobResult>);

impl JobList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Jobs> for JobList {
    fn from(jobs: Jobs) -> Self {
        Self(jobs.results)
    }
}
