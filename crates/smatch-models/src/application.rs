//! Job application models.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Review state of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Waiting for company review
    #[default]
    Pending,
    /// Seen by the company
    Reviewed,
    /// Candidate accepted
    Accepted,
    /// Candidate rejected
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewed => "reviewed",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A job application row.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Application {
    pub job_id: String,

    pub candidate_user_id: String,

    #[serde(default)]
    pub status: ApplicationStatus,

    /// Creation timestamp assigned by the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Columns owned by the store (row id, ...) pass through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Insert payload for an application.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct NewApplication {
    pub job_id: String,
    pub candidate_user_id: String,
    pub status: ApplicationStatus,
}

impl NewApplication {
    /// Create an application insert payload. The status is always
    /// pending regardless of caller input.
    pub fn new(job_id: impl Into<String>, candidate_user_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            candidate_user_id: candidate_user_id.into(),
            status: ApplicationStatus::Pending,
        }
    }
}
