//! Job posting models.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Publication status of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Visible in listings
    #[default]
    Active,
    /// Hidden from listings
    Inactive,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A job posting row.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Job {
    pub title: String,

    pub description: String,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub remote: bool,

    #[serde(default)]
    pub salary_min: Option<f64>,

    #[serde(default)]
    pub salary_max: Option<f64>,

    /// The company user that posted this job.
    pub company_user_id: String,

    #[serde(default)]
    pub status: JobStatus,

    /// Creation timestamp assigned by the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Columns owned by the store (row id, ...) pass through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Insert payload for a job posting.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub remote: bool,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub company_user_id: String,
    pub status: JobStatus,
}

impl NewJob {
    /// Create a job insert payload. `remote` defaults to false and the
    /// status is always active regardless of caller input.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        company_user_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            location: None,
            remote: false,
            salary_min: None,
            salary_max: None,
            company_user_id: company_user_id.into(),
            status: JobStatus::Active,
        }
    }

    pub fn location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    pub fn remote(mut self, remote: bool) -> Self {
        self.remote = remote;
        self
    }

    pub fn salary_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.salary_min = min;
        self.salary_max = max;
        self
    }
}
