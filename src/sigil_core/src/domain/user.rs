use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use super::{email::Email, password_hash::PasswordHash};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("Email is required")]
    MissingEmail,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password is required")]
    MissingPassword,
    #[error("Name is required")]
    MissingName,
}

/// Opaque user identifier, assigned by the credential store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name of a user. Never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl TryFrom<String> for UserName {
    type Error = UserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(UserError::MissingName);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A persisted user identity.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    email: Email,
    name: UserName,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: UserId,
        email: Email,
        name: UserName,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            name,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// A user that has not been persisted yet and therefore has no id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    email: Email,
    name: UserName,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NewUser {
    /// Both timestamps are stamped with `now`.
    pub fn new(email: Email, name: UserName, now: DateTime<Utc>) -> Self {
        Self {
            email,
            name,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Attach the identifier chosen by the store.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            email: self.email,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A user together with its stored password credential, as returned by a lookup.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub user: User,
    pub password_hash: PasswordHash,
}
