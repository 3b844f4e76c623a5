use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

/// Minimum number of characters a password must have to be registered.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A plaintext password supplied by a caller.
///
/// Parsing only rejects empty input so that login attempts with legacy or
/// short passwords still reach verification. Registration additionally checks
/// [`Password::meets_registration_policy`].
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    /// Whether this password is long enough to be stored for a new account.
    ///
    /// Length is counted in characters, not bytes.
    pub fn meets_registration_policy(&self) -> bool {
        self.0.expose_secret().chars().count() >= MIN_PASSWORD_LENGTH
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            return Err(UserError::MissingPassword);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
