//! Repository traits
//!
//! Define async repository interfaces for database operations. The account
//! service is generic over these traits so tests can swap in a per-test
//! in-memory database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::DbResult;
use crate::models::*;

/// User repository trait
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: i64) -> DbResult<Option<UserRow>>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> DbResult<Option<UserRow>>;

    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>>;

    /// Create a new user
    ///
    /// Duplicate usernames or emails fail with `DbError::UniqueViolation`;
    /// the unique indexes are the only duplicate check.
    async fn create(&self, user: CreateUser) -> DbResult<UserRow>;
}

/// Create user input
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Subscription plan repository trait
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Find a plan by ID
    async fn find_by_id(&self, id: i64) -> DbResult<Option<PlanRow>>;

    /// Find a plan by its unique name
    async fn find_by_name(&self, name: &str) -> DbResult<Option<PlanRow>>;

    /// List the catalog, deduplicated by name and ordered by price
    async fn list(&self) -> DbResult<Vec<PlanRow>>;
}

/// User subscription repository trait
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Create a new subscription row
    async fn create(&self, sub: CreateSubscription) -> DbResult<SubscriptionRow>;

    /// Find the current subscription for a user
    ///
    /// The most recently started row with status `active`, joined with its
    /// plan's details.
    async fn find_current_by_user_id(
        &self,
        user_id: i64,
    ) -> DbResult<Option<SubscriptionWithPlanRow>>;
}

/// Create subscription input
#[derive(Debug, Clone)]
pub struct CreateSubscription {
    pub user_id: i64,
    pub plan_id: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: String,
}
