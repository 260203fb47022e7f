//! Subscription plan types

use serde::{Deserialize, Serialize};

/// Unique plan identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanId(pub i64);

impl std::fmt::Display for PlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PlanId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A subscription plan from the seeded catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Plan ID
    pub id: PlanId,
    /// Unique plan name
    pub name: String,
    /// Subscription length in calendar months (>= 1)
    pub duration_months: i64,
    /// Price in the smallest currency unit (>= 0)
    pub price: i64,
    /// Free-text description shown to users
    pub description: String,
}

impl Plan {
    /// Whether this is the zero-price trial tier
    pub fn is_free(&self) -> bool {
        self.price == 0
    }
}
