use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::response::{failure, failure_with_errors, FieldError};

/// Every failure a handler can surface, mapped onto the response envelope.
/// Nothing else crosses the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    InvalidCredentials(String),
    #[error("Internal server error")]
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::InvalidCredentials(message.into())
    }

    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                failure_with_errors("Validation failed", errors),
            ),
            ApiError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, failure(message)),
            ApiError::Forbidden(message) => (StatusCode::FORBIDDEN, failure(message)),
            // The public contract reports duplicate emails and failed logins
            // as plain 400s, not 409/404.
            ApiError::Conflict(message) | ApiError::InvalidCredentials(message) => {
                (StatusCode::BAD_REQUEST, failure(message))
            }
            ApiError::Internal(err) => {
                error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    failure("Internal server error"),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

/// True when the error wraps a database unique-constraint violation, e.g.
/// two registrations racing on the same email.
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .map(|db_err| db_err.is_unique_violation())
        .unwrap_or(false)
}
