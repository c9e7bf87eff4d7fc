//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use smatch_store::StoreError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Fixed message returned whenever a required field is missing. There
/// is deliberately no field-level detail.
pub const MISSING_FIELDS_MESSAGE: &str = "Campos requeridos faltantes";

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field was absent or empty. Never reaches the store.
    #[error("{0}")]
    Validation(String),

    /// Store failure, reported in the `{success: false, error}` envelope.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Store failure on the assessment endpoints, which predate the
    /// success envelope and answer with a bare `{error}` object.
    #[error("{0}")]
    StoreBare(StoreError),
}

impl ApiError {
    pub fn missing_fields() -> Self {
        Self::Validation(MISSING_FIELDS_MESSAGE.to_string())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) | ApiError::StoreBare(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct EnvelopeError {
    success: bool,
    error: String,
}

#[derive(Serialize)]
struct BareError {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            ApiError::StoreBare(err) => (
                status,
                Json(BareError {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            other => (
                status,
                Json(EnvelopeError {
                    success: false,
                    error: other.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
