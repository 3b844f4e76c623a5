use secrecy::Secret;
use serde::Deserialize;
use sigil_core::{AuthContext, CredentialStore, PasswordHasher, TokenIssuer, User};

use crate::{error::AuthError, validation::validate_login_credentials};

pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Raw login input. Validated by the use case, never persisted.
#[derive(Debug, Deserialize)]
pub struct LoginCredentials {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

/// Outcome of a successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    pub access_token: Secret<String>,
    pub refresh_token: Secret<String>,
    pub token_type: &'static str,
}

/// Login use case - authenticates a user and issues bearer tokens
pub struct LoginUseCase<'a, S, T, H>
where
    S: CredentialStore,
    T: TokenIssuer,
    H: PasswordHasher,
{
    credential_store: &'a S,
    token_issuer: &'a T,
    password_hasher: &'a H,
}

impl<'a, S, T, H> LoginUseCase<'a, S, T, H>
where
    S: CredentialStore,
    T: TokenIssuer,
    H: PasswordHasher,
{
    pub fn new(credential_store: &'a S, token_issuer: &'a T, password_hasher: &'a H) -> Self {
        Self {
            credential_store,
            token_issuer,
            password_hasher,
        }
    }

    /// Execute the login use case
    ///
    /// An unknown email and a wrong password both fail with
    /// [`AuthError::InvalidCredentials`], and both paths run the password
    /// hasher once.
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        context: &AuthContext,
        credentials: LoginCredentials,
    ) -> Result<LoginResult, AuthError> {
        let (email, password) = validate_login_credentials(credentials)?;

        let stored_user = match context
            .run(self.credential_store.get_user_by_email(&email))
            .await?
        {
            Ok(stored_user) => stored_user,
            Err(_) => {
                // Equalise cost with the mismatch path.
                let _ = context.run(self.password_hasher.hash(&password)).await?;
                return Err(AuthError::InvalidCredentials);
            }
        };

        let verified = context
            .run(
                self.password_hasher
                    .verify(&password, &stored_user.password_hash),
            )
            .await?;
        if !matches!(verified, Ok(true)) {
            return Err(AuthError::InvalidCredentials);
        }

        let user = stored_user.user;

        let access_token = context
            .run(self.token_issuer.generate_token(user.id()))
            .await?
            .map_err(|e| AuthError::TokenIssuanceFailed(e.to_string()))?;

        let refresh_token = context
            .run(self.token_issuer.generate_refresh_token(user.id()))
            .await?
            .map_err(|e| AuthError::TokenIssuanceFailed(e.to_string()))?;

        Ok(LoginResult {
            user,
            access_token: Secret::from(access_token),
            refresh_token: Secret::from(refresh_token),
            token_type: TOKEN_TYPE_BEARER,
        })
    }
}
