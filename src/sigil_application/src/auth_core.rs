use sigil_core::{AuthContext, CredentialStore, PasswordHasher, TokenIssuer};

use crate::{
    error::AuthError,
    use_cases::{
        login::{LoginCredentials, LoginResult, LoginUseCase},
        register::{RegisterUseCase, Registration},
    },
};

/// Entry point for login and registration.
///
/// Built once with its collaborators and shared (by clone) between request
/// handlers. It holds no mutable state, so concurrent calls need no
/// synchronisation here; collaborators that share state do it internally.
#[derive(Clone)]
pub struct AuthCore<S, T, H> {
    credential_store: S,
    token_issuer: T,
    password_hasher: H,
}

impl<S, T, H> AuthCore<S, T, H>
where
    S: CredentialStore,
    T: TokenIssuer,
    H: PasswordHasher,
{
    pub fn new(credential_store: S, token_issuer: T, password_hasher: H) -> Self {
        Self {
            credential_store,
            token_issuer,
            password_hasher,
        }
    }

    pub async fn login(
        &self,
        context: &AuthContext,
        credentials: LoginCredentials,
    ) -> Result<LoginResult, AuthError> {
        LoginUseCase::new(
            &self.credential_store,
            &self.token_issuer,
            &self.password_hasher,
        )
        .execute(context, credentials)
        .await
    }

    pub async fn register(
        &self,
        context: &AuthContext,
        registration: Registration,
    ) -> Result<(), AuthError> {
        RegisterUseCase::new(&self.credential_store, &self.password_hasher)
            .execute(context, registration)
            .await
    }

    /// The token issuer, for consumers that need to validate tokens.
    pub fn token_issuer(&self) -> &T {
        &self.token_issuer
    }
}
