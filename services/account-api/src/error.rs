//! Error types for the Account API service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use fitgen_account_core::AccountError;

/// API error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// API error type
#[derive(Debug, thiserror::Error)]
#[allow(dead_code)] // Variants reserved for future use
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Account(#[from] AccountError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Account(err) => match err {
                // Conflicts surface as 400, matching the original service
                AccountError::Validation(_) | AccountError::Conflict(_) => StatusCode::BAD_REQUEST,
                AccountError::InvalidCredentials
                | AccountError::InvalidToken
                | AccountError::TokenExpired => StatusCode::UNAUTHORIZED,
                AccountError::PlanNotFound => StatusCode::NOT_FOUND,
                AccountError::Storage(_) | AccountError::Internal(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Account(err) => match err {
                AccountError::Validation(_) => "VALIDATION_ERROR",
                AccountError::Conflict(_) => "CONFLICT",
                AccountError::InvalidCredentials => "INVALID_CREDENTIALS",
                AccountError::InvalidToken => "INVALID_TOKEN",
                AccountError::TokenExpired => "TOKEN_EXPIRED",
                AccountError::PlanNotFound => "NOT_FOUND",
                AccountError::Storage(_) | AccountError::Internal(_) => "INTERNAL_ERROR",
            },
        }
    }

    /// Whether the client-facing message must be replaced with a generic one
    fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Internal(_)
                | Self::Account(AccountError::Storage(_))
                | Self::Account(AccountError::Internal(_))
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        // Internal details are logged server-side only
        let message = if self.is_internal() {
            tracing::error!(error = ?self, "Internal API error");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
