use chrono::Utc;
use secrecy::Secret;
use serde::Deserialize;
use sigil_core::{AuthContext, CredentialStore, CredentialStoreError, NewUser, PasswordHasher};

use crate::{error::AuthError, validation::validate_registration};

/// Raw registration input
#[derive(Debug, Deserialize)]
pub struct Registration {
    pub email: Secret<String>,
    pub name: String,
    pub password: Secret<String>,
}

/// Register use case - handles user registration
pub struct RegisterUseCase<'a, S, H>
where
    S: CredentialStore,
    H: PasswordHasher,
{
    credential_store: &'a S,
    password_hasher: &'a H,
}

impl<'a, S, H> RegisterUseCase<'a, S, H>
where
    S: CredentialStore,
    H: PasswordHasher,
{
    pub fn new(credential_store: &'a S, password_hasher: &'a H) -> Self {
        Self {
            credential_store,
            password_hasher,
        }
    }

    /// Execute the register use case
    ///
    /// The existence check is advisory. Two concurrent registrations for one
    /// email can both pass it, so a duplicate reported by the store on create
    /// is also returned as [`AuthError::UserAlreadyExists`].
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        context: &AuthContext,
        registration: Registration,
    ) -> Result<(), AuthError> {
        let (email, name, password) = validate_registration(registration)?;

        // A failed lookup does not block registration.
        let existing = context
            .run(self.credential_store.get_user_by_email(&email))
            .await?;
        if existing.is_ok() {
            return Err(AuthError::UserAlreadyExists);
        }

        let password_hash = context
            .run(self.password_hasher.hash(&password))
            .await?
            .map_err(|e| AuthError::PersistenceFailed(e.to_string()))?;

        let new_user = NewUser::new(email, name, Utc::now());

        context
            .run(self.credential_store.create_user(new_user, password_hash))
            .await?
            .map_err(|e| match e {
                CredentialStoreError::UserAlreadyExists => AuthError::UserAlreadyExists,
                other => AuthError::PersistenceFailed(other.to_string()),
            })
    }
}
