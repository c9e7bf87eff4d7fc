//! Typed repositories over the store tables.
//!
//! Each repository wraps one table and performs exactly one store
//! request per call. There are no joins and no caching; rows live and
//! die in the store.

use smatch_models::{
    Application, Assessment, Job, JobStatus, NewApplication, NewAssessment, NewJob, NewUser, User,
};

use crate::client::StoreClient;
use crate::error::StoreResult;
use crate::query::{SelectQuery, SortDirection};

// =============================================================================
// Users
// =============================================================================

/// Repository for user rows.
pub struct UserRepository {
    client: StoreClient,
}

impl UserRepository {
    const TABLE: &'static str = "users";

    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Register a user and return the stored row. Uniqueness of the
    /// email is enforced by the store.
    pub async fn create(&self, user: &NewUser) -> StoreResult<User> {
        self.client.insert_one(Self::TABLE, user).await
    }
}

// =============================================================================
// Jobs
// =============================================================================

/// Repository for job posting rows.
pub struct JobRepository {
    client: StoreClient,
}

impl JobRepository {
    const TABLE: &'static str = "jobs";

    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Create a job posting and return the stored row.
    pub async fn create(&self, job: &NewJob) -> StoreResult<Job> {
        self.client.insert_one(Self::TABLE, job).await
    }

    /// List jobs that are currently active.
    pub async fn list_active(&self) -> StoreResult<Vec<Job>> {
        self.client
            .select(
                Self::TABLE,
                SelectQuery::new().eq("status", JobStatus::Active.as_str()),
            )
            .await
    }
}

// =============================================================================
// Applications
// =============================================================================

/// Repository for application rows.
pub struct ApplicationRepository {
    client: StoreClient,
}

impl ApplicationRepository {
    const TABLE: &'static str = "applications";

    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Submit an application and return the stored row.
    pub async fn create(&self, application: &NewApplication) -> StoreResult<Application> {
        self.client.insert_one(Self::TABLE, application).await
    }

    /// List every application, regardless of status.
    pub async fn list(&self) -> StoreResult<Vec<Application>> {
        self.client.select(Self::TABLE, SelectQuery::new()).await
    }
}

// =============================================================================
// Assessments
// =============================================================================

/// Repository for assessment rows.
pub struct AssessmentRepository {
    client: StoreClient,
}

impl AssessmentRepository {
    const TABLE: &'static str = "assessments";
    const ORDER_COLUMN: &'static str = "completed_at";

    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Save an assessment result and return the stored row.
    pub async fn create(&self, assessment: &NewAssessment) -> StoreResult<Assessment> {
        self.client.insert_one(Self::TABLE, assessment).await
    }

    /// List all assessments, most recently completed first.
    pub async fn list(&self) -> StoreResult<Vec<Assessment>> {
        self.client
            .select(
                Self::TABLE,
                SelectQuery::new().order_by(Self::ORDER_COLUMN, SortDirection::Descending),
            )
            .await
    }

    /// List assessments for one candidate email, most recent first.
    /// The email must match the stored value exactly.
    pub async fn list_for_candidate(&self, email: &str) -> StoreResult<Vec<Assessment>> {
        self.client
            .select(
                Self::TABLE,
                SelectQuery::new()
                    .eq("candidate_email", email)
                    .order_by(Self::ORDER_COLUMN, SortDirection::Descending),
            )
            .await
    }
}
