//! Database row models
//!
//! These types map directly to database rows using SQLx's FromRow derive.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use fitgen_types::{Plan, SubscriptionStatus, SubscriptionWithPlan, User};

/// User row from the database
///
/// Carries the password hash; never leaves the service boundary as-is.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl UserRow {
    /// Convert to the public user summary (drops the password hash)
    pub fn into_user(self) -> User {
        User {
            id: self.id.into(),
            username: self.username,
            email: self.email,
            created_at: self.created_at,
        }
    }
}

/// Subscription plan row from the database
#[derive(Debug, Clone, FromRow)]
pub struct PlanRow {
    pub id: i64,
    pub name: String,
    pub duration_months: i64,
    pub price: i64,
    pub description: String,
}

impl PlanRow {
    /// Convert to the domain plan type
    pub fn into_plan(self) -> Plan {
        Plan {
            id: self.id.into(),
            name: self.name,
            duration_months: self.duration_months,
            price: self.price,
            description: self.description,
        }
    }
}

/// User subscription row from the database
#[derive(Debug, Clone, FromRow)]
pub struct SubscriptionRow {
    pub id: i64,
    pub user_id: i64,
    pub plan_id: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: String,
}

/// Subscription row joined with its plan's details
#[derive(Debug, Clone, FromRow)]
pub struct SubscriptionWithPlanRow {
    pub id: i64,
    pub plan_id: i64,
    pub name: String,
    pub duration_months: i64,
    pub price: i64,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: String,
}

impl SubscriptionWithPlanRow {
    /// Convert to the domain type
    ///
    /// Unknown status strings cannot occur through this service's writes;
    /// they fall back to `Active` rather than failing the read path.
    pub fn into_domain(self) -> SubscriptionWithPlan {
        let status = self
            .status
            .parse()
            .unwrap_or(SubscriptionStatus::Active);
        SubscriptionWithPlan {
            id: self.id.into(),
            plan_id: self.plan_id.into(),
            name: self.name,
            duration_months: self.duration_months,
            price: self.price,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            status,
        }
    }
}
