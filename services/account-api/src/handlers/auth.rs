//! Authentication handlers (register, login, profile)

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use fitgen_account_core::NewAccount;
use fitgen_types::User;

use crate::error::ApiResult;
use crate::extractors::{ApiJson, AuthUser};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Username or email; emails take precedence on lookup
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: ProfileClaims,
}

#[derive(Debug, Serialize)]
pub struct ProfileClaims {
    pub id: String,
    pub username: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/auth/register
///
/// Create an account. The trial plan is assigned as a best-effort side
/// effect; the caller must log in separately for a token.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    state
        .account
        .register(NewAccount {
            username: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully",
        }),
    ))
}

/// POST /api/auth/login
///
/// Exchange credentials for a session token and user summary.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let outcome = state.account.login(&req.identifier, &req.password).await?;

    Ok(Json(LoginResponse {
        token: outcome.token,
        user: outcome.user,
    }))
}

/// GET /api/auth/profile
///
/// Return the claims of the presented token.
pub async fn profile(auth_user: AuthUser) -> ApiResult<Json<ProfileResponse>> {
    Ok(Json(ProfileResponse {
        user: ProfileClaims {
            id: auth_user.user_id.to_string(),
            username: auth_user.username,
        },
    }))
}
