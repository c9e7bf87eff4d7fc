//! Assessment handlers.
//!
//! These endpoints predate the `{success, ...}` envelope used by the
//! rest of the API: listings answer with a bare `{assessments}` object
//! and failures with a bare `{error}`. Existing clients depend on that
//! shape, so it is kept.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use smatch_models::{Assessment, NewAssessment, DEFAULT_CHALLENGE_ID};
use smatch_store::AssessmentRepository;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Assessment submission body. No presence validation is performed;
/// whatever arrives is forwarded to the store.
#[derive(Debug, Deserialize)]
pub struct CreateAssessmentRequest {
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default)]
    pub candidate_email: Option<String>,
    #[serde(default)]
    pub challenge_id: Option<i64>,
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
    #[serde(default)]
    pub green_flags: Option<serde_json::Value>,
    #[serde(default)]
    pub yellow_flags: Option<serde_json::Value>,
    #[serde(default)]
    pub red_flags: Option<serde_json::Value>,
    #[serde(default)]
    pub total_time: Option<f64>,
}

/// Assessment creation response.
#[derive(Serialize)]
pub struct CreateAssessmentResponse {
    pub success: bool,
    pub assessment: Assessment,
    pub message: String,
}

/// Assessment listing response.
#[derive(Serialize)]
pub struct AssessmentsResponse {
    pub assessments: Vec<Assessment>,
}

/// Save an assessment result.
///
/// POST /api/assessments
pub async fn create_assessment(
    State(state): State<AppState>,
    Json(request): Json<CreateAssessmentRequest>,
) -> ApiResult<Json<CreateAssessmentResponse>> {
    let new_assessment = NewAssessment {
        candidate_name: request.candidate_name,
        candidate_email: request.candidate_email,
        challenge_id: request.challenge_id.unwrap_or(DEFAULT_CHALLENGE_ID),
        overall_score: request.overall_score,
        detection_score: request.detection_score,
        prioritization_score: request.prioritization_score,
        communication_score: request.communication_score,
        time_efficiency: request.time_efficiency,
        recommendation: request.recommendation,
        green_flags: request.green_flags,
        yellow_flags: request.yellow_flags,
        red_flags: request.red_flags,
        total_time: request.total_time,
    };

    let repo = AssessmentRepository::new((*state.store).clone());
    let assessment = repo
        .create(&new_assessment)
        .await
        .map_err(ApiError::StoreBare)?;

    info!(candidate_email = ?assessment.candidate_email, "Saved assessment");

    Ok(Json(CreateAssessmentResponse {
        success: true,
        assessment,
        message: "Assessment saved successfully".to_string(),
    }))
}

/// List all assessments, most recently completed first.
///
/// GET /api/assessments
pub async fn list_assessments(
    State(state): State<AppState>,
) -> ApiResult<Json<AssessmentsResponse>> {
    let repo = AssessmentRepository::new((*state.store).clone());
    let assessments = repo.list().await.map_err(ApiError::StoreBare)?;

    Ok(Json(AssessmentsResponse { assessments }))
}

/// List assessments for one candidate, most recent first. The email
/// path segment is matched against stored rows exactly.
///
/// GET /api/assessments/candidate/:email
pub async fn list_candidate_assessments(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<AssessmentsResponse>> {
    let repo = AssessmentRepository::new((*state.store).clone());
    let assessments = repo
        .list_for_candidate(&email)
        .await
        .map_err(ApiError::StoreBare)?;

    Ok(Json(AssessmentsResponse { assessments }))
}
