//! Axum extractors for authentication and request bodies

use axum::extract::{FromRef, FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;

use fitgen_types::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from a bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: UserId,
    pub username: String,
}

/// Error response for auth failures
#[derive(Debug, Serialize)]
struct AuthErrorResponse {
    error: AuthErrorDetail,
}

#[derive(Debug, Serialize)]
struct AuthErrorDetail {
    code: &'static str,
    message: &'static str,
}

/// Auth rejection type
pub struct AuthRejection {
    status: StatusCode,
    code: &'static str,
    message: &'static str,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let body = AuthErrorResponse {
            error: AuthErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = extract_bearer_token(parts)?;

        let claims = app_state.account.verify_token(token).map_err(|e| {
            tracing::debug!(error = ?e, "Token verification failed");
            AuthRejection {
                status: StatusCode::UNAUTHORIZED,
                code: "INVALID_TOKEN",
                message: "Invalid or expired token",
            }
        })?;

        let user_id = claims.user_id().map_err(|_| AuthRejection {
            status: StatusCode::UNAUTHORIZED,
            code: "INVALID_TOKEN",
            message: "Invalid or expired token",
        })?;

        Ok(AuthUser {
            user_id,
            username: claims.username,
        })
    }
}

/// JSON request body
///
/// Same as `axum::Json`, except malformed bodies and wrong-typed fields
/// reject with the service's standard 400 error body instead of axum's
/// default 422.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
        }
    }
}

/// Extract a bearer token from the Authorization header
fn extract_bearer_token(parts: &Parts) -> Result<&str, AuthRejection> {
    let Some(auth_header) = parts.headers.get(header::AUTHORIZATION) else {
        return Err(AuthRejection {
            status: StatusCode::UNAUTHORIZED,
            code: "MISSING_TOKEN",
            message: "No authentication token provided",
        });
    };

    let auth_str = auth_header.to_str().map_err(|_| AuthRejection {
        status: StatusCode::BAD_REQUEST,
        code: "INVALID_HEADER",
        message: "Invalid Authorization header encoding",
    })?;

    auth_str.strip_prefix("Bearer ").ok_or(AuthRejection {
        status: StatusCode::UNAUTHORIZED,
        code: "MISSING_TOKEN",
        message: "No authentication token provided",
    })
}
