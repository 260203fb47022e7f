//! Subscription handlers

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use fitgen_types::{Plan, PlanId, SubscriptionWithPlan};

use crate::error::{ApiError, ApiResult};
use crate::extractors::{ApiJson, AuthUser};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub plan_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub subscription_id: i64,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/subscriptions/plans
///
/// Public plan catalog; no auth required.
pub async fn list_plans(State(state): State<AppState>) -> ApiResult<Json<Vec<Plan>>> {
    let plans = state.account.list_plans().await?;
    Ok(Json(plans))
}

/// POST /api/subscriptions/subscribe
pub async fn subscribe(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ApiJson(req): ApiJson<SubscribeRequest>,
) -> ApiResult<Json<SubscribeResponse>> {
    let plan_id = req
        .plan_id
        .ok_or_else(|| ApiError::BadRequest("plan_id is required".to_string()))?;

    let subscription_id = state
        .account
        .subscribe(auth_user.user_id, PlanId(plan_id))
        .await?;

    Ok(Json(SubscribeResponse {
        subscription_id: subscription_id.0,
    }))
}

/// GET /api/subscriptions/current
///
/// The most recently started active subscription with its plan details;
/// `null` when the user has none.
pub async fn current_subscription(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<Option<SubscriptionWithPlan>>> {
    let current = state.account.current_subscription(auth_user.user_id).await?;
    Ok(Json(current))
}
