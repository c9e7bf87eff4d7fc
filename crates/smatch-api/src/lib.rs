//! Axum HTTP API server.
//!
//! This crate provides:
//! - REST endpoints for users, jobs, applications and assessments
//! - A thin gateway over the Supabase table store
//! - Request logging, security headers and CORS
//! - Prometheus metrics

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
