use sigil_core::{ContextError, UserError};
use thiserror::Error;

/// Every way an auth core operation can fail.
///
/// Collaborator failures are folded into exactly one of these kinds. Login
/// never distinguishes an unknown email from a wrong password.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Failed to generate access token")]
    TokenIssuanceFailed(String),
    #[error("Failed to create user")]
    PersistenceFailed(String),
    #[error("Operation cancelled")]
    Cancelled,
}

impl PartialEq for AuthError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::InvalidInput(_), Self::InvalidInput(_))
                | (Self::InvalidCredentials, Self::InvalidCredentials)
                | (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::TokenIssuanceFailed(_), Self::TokenIssuanceFailed(_))
                | (Self::PersistenceFailed(_), Self::PersistenceFailed(_))
                | (Self::Cancelled, Self::Cancelled)
        )
    }
}

impl From<UserError> for AuthError {
    fn from(error: UserError) -> Self {
        AuthError::InvalidInput(error.to_string())
    }
}

impl From<ContextError> for AuthError {
    fn from(_: ContextError) -> Self {
        AuthError::Cancelled
    }
}
