//! Job posting handlers.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use smatch_models::{Job, NewJob};
use smatch_store::JobRepository;

use crate::error::{ApiError, ApiResult};
use crate::handlers::non_empty;
use crate::state::AppState;

/// Job creation request body.
#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub remote: Option<bool>,
    #[serde(default)]
    pub salary_min: Option<f64>,
    #[serde(default)]
    pub salary_max: Option<f64>,
    #[serde(default)]
    pub company_user_id: Option<String>,
}

/// Job creation response envelope.
#[derive(Serialize)]
pub struct CreateJobResponse {
    pub success: bool,
    pub job: Job,
}

/// Job listing response envelope.
#[derive(Serialize)]
pub struct ListJobsResponse {
    pub success: bool,
    pub jobs: Vec<Job>,
}

/// Create a job posting. The stored status is always active.
///
/// POST /jobs
pub async fn create_job(
    State(state): State<AppState>,
    Json(request): Json<CreateJobRequest>,
) -> ApiResult<Json<CreateJobResponse>> {
    let (Some(title), Some(description), Some(company_user_id)) = (
        non_empty(request.title),
        non_empty(request.description),
        non_empty(request.company_user_id),
    ) else {
        return Err(ApiError::missing_fields());
    };

    let new_job = NewJob::new(title, description, company_user_id)
        .location(request.location)
        .remote(request.remote.unwrap_or(false))
        .salary_range(request.salary_min, request.salary_max);

    let repo = JobRepository::new((*state.store).clone());
    let job = repo.create(&new_job).await?;

    info!(title = %job.title, company_user_id = %job.company_user_id, "Created job");

    Ok(Json(CreateJobResponse { success: true, job }))
}

/// List active jobs.
///
/// GET /jobs
pub async fn list_jobs(State(state): State<AppState>) -> ApiResult<Json<ListJobsResponse>> {
    let repo = JobRepository::new((*state.store).clone());
    let jobs = repo.list_active().await?;

    Ok(Json(ListJobsResponse {
        success: true,
        jobs,
    }))
}
