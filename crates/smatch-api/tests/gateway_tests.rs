//! End-to-end gateway tests against a mock store.
//!
//! Each test stands up a wiremock server playing the PostgREST role
//! and drives the real router with `tower::ServiceExt::oneshot`.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use smatch_api::{create_router, ApiConfig, AppState};
use smatch_store::{StoreClient, StoreConfig};

fn test_app(store_url: &str) -> Router {
    let store = StoreClient::new(StoreConfig {
        url: store_url.to_string(),
        anon_key: "test-key".to_string(),
        timeout: Duration::from_secs(5),
        connect_timeout: Duration::from_secs(2),
    })
    .unwrap();

    create_router(AppState::new(ApiConfig::default(), store), None)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

// ============================================================================
// Root / health
// ============================================================================

#[tokio::test]
async fn root_returns_welcome_message() {
    let server = MockServer::start().await;
    let (status, body) = get(test_app(&server.uri()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "SMatch Backend API");
}

#[tokio::test]
async fn health_reports_healthy() {
    let server = MockServer::start().await;
    let (status, body) = get(test_app(&server.uri()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn register_creates_user() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/users"))
        .and(body_partial_json(json!({
            "email": "a@b.com",
            "full_name": "A B",
            "user_type": "candidate"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
            "id": 1,
            "email": "a@b.com",
            "full_name": "A B",
            "user_type": "candidate",
            "company_name": null
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post(
        test_app(&server.uri()),
        "/register",
        json!({"email": "a@b.com", "full_name": "A B", "user_type": "candidate"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["email"], "a@b.com");
    assert_eq!(body["user"]["full_name"], "A B");
    assert_eq!(body["user"]["user_type"], "candidate");
    assert_eq!(body["user"]["company_name"], Value::Null);
}

#[tokio::test]
async fn register_missing_fields_never_reaches_store() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = post(
        test_app(&server.uri()),
        "/register",
        json!({"email": "a@b.com"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Campos requeridos faltantes");
}

#[tokio::test]
async fn register_empty_field_counts_as_missing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = post(
        test_app(&server.uri()),
        "/register",
        json!({"email": "", "full_name": "A B", "user_type": "candidate"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Campos requeridos faltantes");
}

#[tokio::test]
async fn register_surfaces_store_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "duplicate key value violates unique constraint \"users_email_key\"",
            "code": "23505"
        })))
        .mount(&server)
        .await;

    let (status, body) = post(
        test_app(&server.uri()),
        "/register",
        json!({"email": "a@b.com", "full_name": "A B", "user_type": "candidate"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("users_email_key"));
}

// ============================================================================
// Jobs
// ============================================================================

#[tokio::test]
async fn create_job_forces_defaults() {
    let server = MockServer::start().await;

    // remote defaults to false and status is forced to active
    Mock::given(method("POST"))
        .and(path("/rest/v1/jobs"))
        .and(body_partial_json(json!({
            "title": "Eng",
            "company_user_id": "u1",
            "remote": false,
            "status": "active"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
            "id": 10,
            "title": "Eng",
            "description": "Build things",
            "company_user_id": "u1",
            "remote": false,
            "status": "active"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post(
        test_app(&server.uri()),
        "/jobs",
        json!({"title": "Eng", "description": "Build things", "company_user_id": "u1"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["job"]["remote"], false);
    assert_eq!(body["job"]["status"], "active");
}

#[tokio::test]
async fn create_job_missing_fields_never_reaches_store() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/jobs"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = post(
        test_app(&server.uri()),
        "/jobs",
        json!({"description": "Build things"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Campos requeridos faltantes");
}

#[tokio::test]
async fn list_jobs_requests_only_active() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/jobs"))
        .and(query_param("status", "eq.active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 10,
            "title": "Eng",
            "description": "...",
            "company_user_id": "u1",
            "status": "active"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(test_app(&server.uri()), "/jobs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["jobs"].as_array().unwrap().len(), 1);
    assert_eq!(body["jobs"][0]["status"], "active");
}

#[tokio::test]
async fn list_jobs_surfaces_store_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/jobs"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "connection refused"})),
        )
        .mount(&server)
        .await;

    let (status, body) = get(test_app(&server.uri()), "/jobs").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("connection refused"));
}

// ============================================================================
// Applications
// ============================================================================

#[tokio::test]
async fn create_application_forces_pending() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/applications"))
        .and(body_partial_json(json!({
            "job_id": "j1",
            "candidate_user_id": "u2",
            "status": "pending"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
            "id": 5,
            "job_id": "j1",
            "candidate_user_id": "u2",
            "status": "pending"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post(
        test_app(&server.uri()),
        "/applications",
        json!({"job_id": "j1", "candidate_user_id": "u2"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["application"]["status"], "pending");
}

#[tokio::test]
async fn create_application_missing_fields_never_reaches_store() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/applications"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = post(
        test_app(&server.uri()),
        "/applications",
        json!({"job_id": "j1"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Campos requeridos faltantes");
}

#[tokio::test]
async fn list_applications_returns_all_statuses() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/applications"))
        .and(query_param("select", "*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "job_id": "j1", "candidate_user_id": "u2", "status": "pending"},
            {"id": 2, "job_id": "j1", "candidate_user_id": "u3", "status": "rejected"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(test_app(&server.uri()), "/applications").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["applications"].as_array().unwrap().len(), 2);

    // The listing sent no status filter
    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].url.query().unwrap_or("").contains("status"));
}

// ============================================================================
// Assessments
// ============================================================================

#[tokio::test]
async fn create_assessment_defaults_challenge_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/assessments"))
        .and(body_partial_json(json!({
            "candidate_email": "ana@example.com",
            "challenge_id": 1
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
            "id": 9,
            "candidate_name": "Ana",
            "candidate_email": "ana@example.com",
            "challenge_id": 1,
            "overall_score": 87.5,
            "green_flags": [{"note": "clear writeup"}],
            "completed_at": "2025-03-01T10:00:00Z"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post(
        test_app(&server.uri()),
        "/api/assessments",
        json!({
            "candidate_name": "Ana",
            "candidate_email": "ana@example.com",
            "overall_score": 87.5,
            "green_flags": [{"note": "clear writeup"}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Assessment saved successfully");
    assert_eq!(body["assessment"]["challenge_id"], 1);
    assert_eq!(body["assessment"]["green_flags"], json!([{"note": "clear writeup"}]));
}

#[tokio::test]
async fn assessment_failure_uses_bare_error_shape() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/assessments"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "insert failed"})),
        )
        .mount(&server)
        .await;

    let (status, body) = post(
        test_app(&server.uri()),
        "/api/assessments",
        json!({"candidate_email": "ana@example.com"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("insert failed"));
    // Legacy shape: no success flag
    assert!(body.get("success").is_none());
}

#[tokio::test]
async fn list_assessments_orders_most_recent_first() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/assessments"))
        .and(query_param("order", "completed_at.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 3, "challenge_id": 1, "completed_at": "2025-03-03T00:00:00Z"},
            {"id": 2, "challenge_id": 1, "completed_at": "2025-03-02T00:00:00Z"},
            {"id": 1, "challenge_id": 1, "completed_at": "2025-03-01T00:00:00Z"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(test_app(&server.uri()), "/api/assessments").await;

    assert_eq!(status, StatusCode::OK);
    let listed: Vec<_> = body["assessments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].clone())
        .collect();
    assert_eq!(listed, vec![json!(3), json!(2), json!(1)]);
    // Legacy shape: no success flag on listings either
    assert!(body.get("success").is_none());
}

#[tokio::test]
async fn candidate_assessments_filter_by_email() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/assessments"))
        .and(query_param("candidate_email", "eq.ana@example.com"))
        .and(query_param("order", "completed_at.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "candidate_email": "ana@example.com", "challenge_id": 1,
             "completed_at": "2025-03-02T00:00:00Z"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(
        test_app(&server.uri()),
        "/api/assessments/candidate/ana%40example.com",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["assessments"][0]["candidate_email"], "ana@example.com");
}

#[tokio::test]
async fn list_assessments_failure_uses_bare_error_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/assessments"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"message": "unavailable"})))
        .mount(&server)
        .await;

    let (status, body) = get(test_app(&server.uri()), "/api/assessments").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("unavailable"));
    assert!(body.get("success").is_none());
}
