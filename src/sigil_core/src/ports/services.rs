use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{password::Password, password_hash::PasswordHash, user::UserId};

// TokenIssuer port trait and errors
#[derive(Debug, Error)]
pub enum TokenIssuerError {
    #[error("Token error: {0}")]
    TokenError(String),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Mints and checks bearer tokens bound to a user id.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    async fn generate_token(&self, user_id: &UserId) -> Result<String, TokenIssuerError>;

    /// A refresh token must be distinct from, and not usable as, an access token.
    async fn generate_refresh_token(&self, user_id: &UserId) -> Result<String, TokenIssuerError>;

    /// `Ok(false)` for tokens that are malformed, expired or otherwise not
    /// acceptable as access tokens. `Err` only for internal failures.
    async fn validate_token(&self, token: &str) -> Result<bool, TokenIssuerError>;
}

// PasswordHasher port trait and errors
#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Malformed password hash: {0}")]
    MalformedHash(String),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError>;
    async fn verify(
        &self,
        password: &Password,
        expected: &PasswordHash,
    ) -> Result<bool, PasswordHasherError>;
}
