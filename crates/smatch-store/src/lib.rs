//! Supabase REST table-store client.
//!
//! This crate provides:
//! - A PostgREST client with connection pooling and typed errors
//! - Select query construction (equality filters, ordering)
//! - Typed repositories for users, jobs, applications and assessments
//!
//! Every repository call maps to exactly one store request. Constraint
//! enforcement (unique emails, foreign keys) is the store's job; a
//! violation surfaces as a [`StoreError`].

pub mod client;
pub mod error;
pub mod metrics;
pub mod query;
pub mod repos;

pub use client::{StoreClient, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use query::{SelectQuery, SortDirection};
pub use repos::{ApplicationRepository, AssessmentRepository, JobRepository, UserRepository};
