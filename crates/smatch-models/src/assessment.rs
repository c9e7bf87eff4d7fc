//! Assessment result models.
//!
//! Assessments arrive from an external evaluation tool. The gateway
//! stores whatever it is given: none of the score fields are required
//! and the flag collections are never interpreted.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Challenge used when the submission does not name one.
pub const DEFAULT_CHALLENGE_ID: i64 = 1;

/// A completed assessment row.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Assessment {
    #[serde(default)]
    pub candidate_name: Option<String>,

    #[serde(default)]
    pub candidate_email: Option<String>,

    #[serde(default = "default_challenge_id")]
    pub challenge_id: i64,

    #[serde(default)]
    pub overall_score: Option<f64>,

    #[serde(default)]
    pub detection_score: Option<f64>,

    #[serde(default)]
    pub prioritization_score: Option<f64>,

    #[serde(default)]
    pub communication_score: Option<f64>,

    #[serde(default)]
    pub time_efficiency: Option<f64>,

    #[serde(default)]
    pub recommendation: Option<String>,

    /// Reviewer flag collections, stored and returned untyped.
    #[serde(default)]
    pub green_flags: Option<serde_json::Value>,

    #[serde(default)]
    pub yellow_flags: Option<serde_json::Value>,

    #[serde(default)]
    pub red_flags: Option<serde_json::Value>,

    #[serde(default)]
    pub total_time: Option<f64>,

    /// Completion timestamp assigned by the store; listings order by it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    /// Columns owned by the store (row id, ...) pass through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_challenge_id() -> i64 {
    DEFAULT_CHALLENGE_ID
}

/// Insert payload for an assessment result.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct NewAssessment {
    pub candidate_name: Option<String>,
    pub candidate_email: Option<String>,
    pub challenge_id: i64,
    pub overall_score: Option<f64>,
    pub detection_score: Option<f64>,
    pub prioritization_score: Option<f64>,
    pub communication_score: Option<f64>,
    pub time_efficiency: Option<f64>,
    pub recommendation: Option<String>,
    pub green_flags: Option<serde_json::Value>,
    pub yellow_flags: Option<serde_json::Value>,
    pub red_flags: Option<serde_json::Value>,
    pub total_time: Option<f64>,
}
