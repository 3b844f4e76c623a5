use std::{
    hash::{Hash, Hasher},
    sync::LazyLock,
};

use regex::Regex;
use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
});

/// A syntactically valid email address.
///
/// The address is kept behind a [`Secret`] so it never shows up in `Debug`
/// output or tracing fields by accident.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    fn parse(candidate: Secret<String>) -> Result<Self, UserError> {
        let value = candidate.expose_secret();
        if value.trim().is_empty() {
            return Err(UserError::MissingEmail);
        }
        if !EMAIL_PATTERN.is_match(value) {
            return Err(UserError::InvalidEmail);
        }
        Ok(Self(candidate))
    }

    /// Accept any non-empty address as a lookup key.
    ///
    /// Syntax is only enforced when an address is registered, so a login with
    /// an address that could never have been stored still reaches the store
    /// and fails like any other unknown email.
    pub fn parse_login(candidate: Secret<String>) -> Result<Self, UserError> {
        if candidate.expose_secret().is_empty() {
            return Err(UserError::MissingEmail);
        }
        Ok(Self(candidate))
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}
