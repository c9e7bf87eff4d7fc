//! API routes.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::applications::{create_application, list_applications};
use crate::handlers::assessments::{
    create_assessment, list_assessments, list_candidate_assessments,
};
use crate::handlers::health::{health, root};
use crate::handlers::jobs::{create_job, list_jobs};
use crate::handlers::users::register;
use crate::metrics::metrics_middleware;
use crate::middleware::{cors_layer, request_id, request_logging, security_headers};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState, metrics_handle: Option<PrometheusHandle>) -> Router {
    let user_routes = Router::new().route("/register", post(register));

    let job_routes = Router::new()
        .route("/jobs", get(list_jobs))
        .route("/jobs", post(create_job));

    let application_routes = Router::new()
        .route("/applications", post(create_application))
        .route("/applications", get(list_applications));

    // Assessment routes live under /api, matching the paths existing
    // clients already call
    let assessment_routes = Router::new()
        .route("/api/assessments", post(create_assessment))
        .route("/api/assessments", get(list_assessments))
        .route(
            "/api/assessments/candidate/:email",
            get(list_candidate_assessments),
        );

    let health_routes = Router::new()
        .route("/", get(root))
        .route("/health", get(health));

    // Metrics endpoint (if enabled)
    let metrics_routes = if let Some(handle) = metrics_handle {
        Router::new().route("/metrics", get(move || async move { handle.render() }))
    } else {
        Router::new()
    };

    Router::new()
        .merge(user_routes)
        .merge(job_routes)
        .merge(application_routes)
        .merge(assessment_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
