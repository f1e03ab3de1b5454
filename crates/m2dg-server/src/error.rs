use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use m2dg_platform::PlatformError;
use m2dg_sessions::SessionError;
use serde::Serialize;

/// API error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Missing, invalid or expired token, unknown subject, or bad login
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("Already registered for this tournament")]
    AlreadyRegistered,

    #[error("Already a member of this team")]
    AlreadyMember,

    #[error("{0}")]
    Full(String),

    #[error("{0}")]
    InvalidState(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Missing or invalid credentials".to_string(),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::AlreadyExists(msg) => (StatusCode::BAD_REQUEST, "ALREADY_EXISTS", msg),
            ApiError::AlreadyRegistered => (
                StatusCode::BAD_REQUEST,
                "ALREADY_REGISTERED",
                "Already registered for this tournament".to_string(),
            ),
            ApiError::AlreadyMember => (
                StatusCode::BAD_REQUEST,
                "ALREADY_MEMBER",
                "Already a member of this team".to_string(),
            ),
            ApiError::Full(msg) => (StatusCode::BAD_REQUEST, "FULL", msg),
            ApiError::InvalidState(msg) => (StatusCode::BAD_REQUEST, "INVALID_STATE", msg),
            ApiError::Internal(err) => {
                tracing::error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetails {
                code: code.to_string(),
                message,
            },
        });

        (status, body).into_response()
    }
}

impl From<PlatformError> for ApiError {
    fn from(error: PlatformError) -> Self {
        match error {
            PlatformError::NotFound(_) => ApiError::NotFound(error.to_string()),
            PlatformError::AlreadyExists(msg) => ApiError::AlreadyExists(msg),
            PlatformError::AlreadyRegistered => ApiError::AlreadyRegistered,
            PlatformError::AlreadyMember => ApiError::AlreadyMember,
            PlatformError::Full(_) => ApiError::Full(error.to_string()),
            PlatformError::InvalidState(msg) => ApiError::InvalidState(msg),
            PlatformError::InvalidCredentials => ApiError::Unauthorized,
            PlatformError::Validation(msg) => ApiError::InvalidRequest(msg),
            PlatformError::Storage(_) | PlatformError::Crypto(_) | PlatformError::Other(_) => {
                ApiError::Internal(anyhow::Error::new(error))
            }
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::InvalidToken
            | SessionError::Unauthenticated
            | SessionError::UserNotFound => ApiError::Unauthorized,
            SessionError::PlatformError(e) => e.into(),
            SessionError::TtlOutOfRange | SessionError::JwtEncodingError(_) => {
                ApiError::Internal(anyhow::Error::new(error))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use m2dg_storage::StorageError;

    #[test]
    fn test_platform_error_status_mapping() {
        let cases = [
            (PlatformError::NotFound("Court"), StatusCode::NOT_FOUND),
            (
                PlatformError::AlreadyExists("Email already registered".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (PlatformError::AlreadyRegistered, StatusCode::BAD_REQUEST),
            (PlatformError::AlreadyMember, StatusCode::BAD_REQUEST),
            (PlatformError::Full("Team"), StatusCode::BAD_REQUEST),
            (
                PlatformError::InvalidState("Challenge is not open".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (PlatformError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (
                PlatformError::Validation("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                PlatformError::Storage(StorageError::Database("boom".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let response = ApiError::from(error).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_session_errors_are_unauthorized() {
        for error in [
            SessionError::InvalidToken,
            SessionError::Unauthenticated,
            SessionError::UserNotFound,
        ] {
            let response = ApiError::from(error).into_response();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }
}
