//! Job application handlers.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use smatch_models::{Application, NewApplication};
use smatch_store::ApplicationRepository;

use crate::error::{ApiError, ApiResult};
use crate::handlers::non_empty;
use crate::state::AppState;

/// Application submission body.
#[derive(Debug, Deserialize)]
pub struct CreateApplicationRequest {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub candidate_user_id: Option<String>,
}

/// Application creation response envelope.
#[derive(Serialize)]
pub struct CreateApplicationResponse {
    pub success: bool,
    pub application: Application,
}

/// Application listing response envelope.
#[derive(Serialize)]
pub struct ListApplicationsResponse {
    pub success: bool,
    pub applications: Vec<Application>,
}

/// Submit an application. The stored status is always pending.
///
/// POST /applications
pub async fn create_application(
    State(state): State<AppState>,
    Json(request): Json<CreateApplicationRequest>,
) -> ApiResult<Json<CreateApplicationResponse>> {
    let (Some(job_id), Some(candidate_user_id)) = (
        non_empty(request.job_id),
        non_empty(request.candidate_user_id),
    ) else {
        return Err(ApiError::missing_fields());
    };

    let repo = ApplicationRepository::new((*state.store).clone());
    let application = repo
        .create(&NewApplication::new(job_id, candidate_user_id))
        .await?;

    info!(
        job_id = %application.job_id,
        candidate_user_id = %application.candidate_user_id,
        "Created application"
    );

    Ok(Json(CreateApplicationResponse {
        success: true,
        application,
    }))
}

/// List every application, regardless of status.
///
/// GET /applications
pub async fn list_applications(
    State(state): State<AppState>,
) -> ApiResult<Json<ListApplicationsResponse>> {
    let repo = ApplicationRepository::new((*state.store).clone());
    let applications = repo.list().await?;

    Ok(Json(ListApplicationsResponse {
        success: true,
        applications,
    }))
}
