use argon2::{
    Algorithm, Argon2, Params, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};
use sigil_core::{Password, PasswordHash, PasswordHasher, PasswordHasherError};

/// Argon2id with fixed parameters. Hashing runs on the blocking pool.
#[derive(Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

fn argon2() -> Result<Argon2<'static>, PasswordHasherError> {
    let params = Params::new(15000, 2, 1, None)
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        let password = password.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                argon2()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| PasswordHash::new(Secret::from(h.to_string())))
                    .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        password: &Password,
        expected: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        let password = password.clone();
        let expected = expected.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected_hash = password_hash::PasswordHash::new(
                    expected.as_ref().expose_secret(),
                )
                .map_err(|e| PasswordHasherError::MalformedHash(e.to_string()))?;

                match argon2()?
                    .verify_password(password.as_ref().expose_secret().as_bytes(), &expected_hash)
                {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(PasswordHasherError::UnexpectedError(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?
    }
}
