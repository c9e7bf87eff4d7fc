//! User registration handlers.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use smatch_models::{NewUser, User, UserType};
use smatch_store::UserRepository;

use crate::error::{ApiError, ApiResult};
use crate::handlers::non_empty;
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub user_type: Option<UserType>,
    #[serde(default)]
    pub company_name: Option<String>,
}

/// Registration response envelope.
#[derive(Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub user: User,
}

/// Register a user.
///
/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<Json<RegisterResponse>> {
    let (Some(email), Some(full_name), Some(user_type)) = (
        non_empty(request.email),
        non_empty(request.full_name),
        request.user_type,
    ) else {
        return Err(ApiError::missing_fields());
    };

    let repo = UserRepository::new((*state.store).clone());
    let user = repo
        .create(&NewUser::new(email, full_name, user_type, request.company_name))
        .await?;

    info!(email = %user.email, user_type = %user.user_type, "Registered user");

    Ok(Json(RegisterResponse {
        success: true,
        user,
    }))
}
