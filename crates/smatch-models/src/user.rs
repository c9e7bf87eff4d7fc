//! User account models.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account type for a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Applies to jobs
    Candidate,
    /// Posts jobs
    Company,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Candidate => "candidate",
            UserType::Company => "company",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user row.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct User {
    pub email: String,

    pub full_name: String,

    pub user_type: UserType,

    /// Company display name; null for candidate accounts.
    #[serde(default)]
    pub company_name: Option<String>,

    /// Creation timestamp assigned by the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Columns owned by the store (row id, ...) pass through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Insert payload for user registration.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct NewUser {
    pub email: String,
    pub full_name: String,
    pub user_type: UserType,
    pub company_name: Option<String>,
}

impl NewUser {
    /// Build a registration row. `company_name` is kept only for
    /// company accounts and nulled out for everyone else.
    pub fn new(
        email: impl Into<String>,
        full_name: impl Into<String>,
        user_type: UserType,
        company_name: Option<String>,
    ) -> Self {
        Self {
            email: email.into(),
            full_name: full_name.into(),
            user_type,
            company_name: if user_type == UserType::Company {
                company_name
            } else {
                None
            },
        }
    }
}
