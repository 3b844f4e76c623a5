use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    password_hash::PasswordHash,
    user::{NewUser, StoredUser},
};

// CredentialStore port trait and errors
#[derive(Debug, Error)]
pub enum CredentialStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for CredentialStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Persistence of user records keyed by email.
///
/// `create_user` is the authoritative uniqueness check: implementations must
/// return [`CredentialStoreError::UserAlreadyExists`] when the email is taken,
/// even if a caller checked beforehand.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn create_user(
        &self,
        user: NewUser,
        password_hash: PasswordHash,
    ) -> Result<(), CredentialStoreError>;
    async fn get_user_by_email(&self, email: &Email) -> Result<StoredUser, CredentialStoreError>;
}
