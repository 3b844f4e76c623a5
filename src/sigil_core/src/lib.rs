pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    context::{AuthContext, CancelHandle, ContextError},
    email::Email,
    password::{MIN_PASSWORD_LENGTH, Password},
    password_hash::PasswordHash,
    user::{NewUser, StoredUser, User, UserError, UserId, UserName},
};

pub use ports::{
    repositories::{CredentialStore, CredentialStoreError},
    services::{PasswordHasher, PasswordHasherError, TokenIssuer, TokenIssuerError},
};
