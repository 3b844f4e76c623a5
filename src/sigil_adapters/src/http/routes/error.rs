use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use sigil_application::AuthError;
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("Request body is empty")]
    EmptyBody,

    #[error("Invalid request body")]
    InvalidBody,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Request timed out or was cancelled")]
    Unavailable,

    #[error("{0}")]
    UnexpectedError(String),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let status_code = match self {
            AuthApiError::EmptyBody | AuthApiError::InvalidBody | AuthApiError::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            AuthApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthApiError::UserAlreadyExists => StatusCode::CONFLICT,
            AuthApiError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            AuthApiError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status_code, body).into_response()
    }
}

impl From<AuthError> for AuthApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::InvalidInput(message) => AuthApiError::InvalidInput(message),
            AuthError::InvalidCredentials => AuthApiError::InvalidCredentials,
            AuthError::UserAlreadyExists => AuthApiError::UserAlreadyExists,
            AuthError::Cancelled => AuthApiError::Unavailable,
            AuthError::TokenIssuanceFailed(ref cause) | AuthError::PersistenceFailed(ref cause) => {
                tracing::error!(cause = %cause, "{error}");
                AuthApiError::UnexpectedError(error.to_string())
            }
        }
    }
}
