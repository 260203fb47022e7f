//! Subscription types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{PlanId, UserId};

/// Unique subscription identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub i64);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SubscriptionId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Subscription status
///
/// Only `Active` is ever written today; `Expired` and `Cancelled` are part
/// of the closed set so the schema does not change when lifecycle
/// transitions are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Subscription is active
    Active,
    /// End date has passed
    Expired,
    /// Cancelled by the user
    Cancelled,
}

impl SubscriptionStatus {
    /// String form as stored in the database
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SubscriptionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "expired" => Ok(Self::Expired),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("unknown subscription status: {other}")),
        }
    }
}

/// A user subscription row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    /// Subscription ID
    pub id: SubscriptionId,
    /// Owning user
    pub user_id: UserId,
    /// Subscribed plan
    pub plan_id: PlanId,
    /// Period start
    pub start_date: DateTime<Utc>,
    /// Period end (start advanced by the plan duration)
    pub end_date: DateTime<Utc>,
    /// Subscription status
    pub status: SubscriptionStatus,
}

/// A subscription joined with its plan details
///
/// The shape returned by "current subscription" queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionWithPlan {
    /// Subscription ID
    pub id: SubscriptionId,
    /// Subscribed plan
    pub plan_id: PlanId,
    /// Plan name
    pub name: String,
    /// Plan duration in months
    pub duration_months: i64,
    /// Plan price in the smallest currency unit
    pub price: i64,
    /// Plan description
    pub description: String,
    /// Period start
    pub start_date: DateTime<Utc>,
    /// Period end
    pub end_date: DateTime<Utc>,
    /// Subscription status
    pub status: SubscriptionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in [
            SubscriptionStatus::Active,
            SubscriptionStatus::Expired,
            SubscriptionStatus::Cancelled,
        ] {
            let parsed: SubscriptionStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert!("paused".parse::<SubscriptionStatus>().is_err());
        assert!("".parse::<SubscriptionStatus>().is_err());
    }

    #[test]
    fn test_status_serde_snake_case() {
        let json = serde_json::to_string(&SubscriptionStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
    }
}
