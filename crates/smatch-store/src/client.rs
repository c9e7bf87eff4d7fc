//! Supabase PostgREST client.
//!
//! A thin client over the store's REST surface:
//! - HTTP client tuning (pooling, timeouts)
//! - `apikey` / bearer authentication on every request
//! - Inserts with `Prefer: return=representation`
//! - Observability (tracing spans, metrics)
//!
//! There is deliberately no retry logic: every store failure is
//! terminal for the request that caused it.

use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info_span, Instrument};

use crate::error::{StoreError, StoreResult};
use crate::metrics::record_request;
use crate::query::SelectQuery;

// =============================================================================
// Configuration
// =============================================================================

/// Store client configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Supabase project URL
    pub url: String,
    /// Anonymous API key
    pub anon_key: String,
    /// Request timeout
    pub timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
}

impl StoreConfig {
    /// Create config from environment variables.
    pub fn from_env() -> StoreResult<Self> {
        let url = std::env::var("SUPABASE_URL")
            .map_err(|_| StoreError::config("SUPABASE_URL must be set to reach the store"))?;
        if url.is_empty() {
            return Err(StoreError::config("SUPABASE_URL cannot be empty"));
        }

        let anon_key = std::env::var("SUPABASE_ANON_KEY")
            .map_err(|_| StoreError::config("SUPABASE_ANON_KEY must be set to reach the store"))?;
        if anon_key.is_empty() {
            return Err(StoreError::config("SUPABASE_ANON_KEY cannot be empty"));
        }

        let timeout_secs: u64 = std::env::var("STORE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        let connect_timeout_secs: u64 = std::env::var("STORE_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            url,
            anon_key,
            timeout: Duration::from_secs(timeout_secs),
            connect_timeout: Duration::from_secs(connect_timeout_secs),
        })
    }
}

// =============================================================================
// Client
// =============================================================================

/// Supabase PostgREST client.
#[derive(Clone)]
pub struct StoreClient {
    http: Client,
    base_url: String,
    anon_key: String,
}

impl StoreClient {
    /// Create a new store client.
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(10)
            .user_agent(concat!("smatch-store/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(StoreError::Network)?;

        let base_url = format!("{}/rest/v1", config.url.trim_end_matches('/'));

        Ok(Self {
            http,
            base_url,
            anon_key: config.anon_key,
        })
    }

    /// Create from environment variables.
    pub fn from_env() -> StoreResult<Self> {
        Self::new(StoreConfig::from_env()?)
    }

    /// Build table endpoint URL.
    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.base_url, table)
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Insert a row and return the stored representation.
    pub async fn insert<T, R>(&self, table: &str, row: &T) -> StoreResult<Vec<R>>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.table_url(table);

        self.execute_request("insert", table, async {
            let response = self
                .http
                .post(&url)
                .header("apikey", &self.anon_key)
                .bearer_auth(&self.anon_key)
                .header("Prefer", "return=representation")
                .json(row)
                .send()
                .await?;
            let status = response.status();

            match status {
                StatusCode::OK | StatusCode::CREATED => {
                    let rows: Vec<R> = response.json().await?;
                    Ok(rows)
                }
                _ => Err(Self::handle_error_response(status, response).await),
            }
        })
        .await
    }

    /// Insert a row, expecting exactly one row back.
    pub async fn insert_one<T, R>(&self, table: &str, row: &T) -> StoreResult<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut rows = self.insert(table, row).await?;
        match rows.len() {
            1 => Ok(rows.remove(0)),
            n => Err(StoreError::invalid_response(format!(
                "expected one row from insert into {}, got {}",
                table, n
            ))),
        }
    }

    /// Select rows matching a query. Row order is whatever the store
    /// returns, so ordered listings must say so in the query.
    pub async fn select<R>(&self, table: &str, query: SelectQuery) -> StoreResult<Vec<R>>
    where
        R: DeserializeOwned,
    {
        let url = self.table_url(table);
        let params = query.into_params();

        self.execute_request("select", table, async {
            let response = self
                .http
                .get(&url)
                .header("apikey", &self.anon_key)
                .bearer_auth(&self.anon_key)
                .query(&params)
                .send()
                .await?;
            let status = response.status();

            match status {
                StatusCode::OK => {
                    let rows: Vec<R> = response.json().await?;
                    Ok(rows)
                }
                _ => Err(Self::handle_error_response(status, response).await),
            }
        })
        .await
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    /// Execute a request with tracing and metrics.
    async fn execute_request<T, F>(&self, operation: &str, table: &str, fut: F) -> StoreResult<T>
    where
        F: std::future::Future<Output = StoreResult<T>>,
    {
        let span = info_span!("store_request", operation = %operation, table = %table);

        let start = Instant::now();
        let result = fut.instrument(span).await;
        let latency_ms = start.elapsed().as_millis() as f64;

        let status = match &result {
            Ok(_) => 200,
            Err(e) => e.http_status().unwrap_or(500),
        };
        record_request(operation, status, latency_ms);

        result
    }

    async fn handle_error_response(status: StatusCode, response: reqwest::Response) -> StoreError {
        let body = response.text().await.unwrap_or_default();
        // PostgREST reports failures as {message, code, details, hint};
        // surface the message and fall back to the raw body.
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or(body);
        StoreError::from_http_status(status.as_u16(), message)
    }
}

/// PostgREST error body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    code: Option<String>,
}

// =============================================================================
// Tests
// =============================================================================
