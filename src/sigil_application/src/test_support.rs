//! Counting test doubles for the auth core ports.

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use chrono::Utc;
use secrecy::{ExposeSecret, Secret};
use sigil_core::{
    CredentialStore, CredentialStoreError, Email, NewUser, Password, PasswordHash, PasswordHasher,
    PasswordHasherError, StoredUser, TokenIssuer, TokenIssuerError, UserId, UserName,
};

#[derive(Clone, Copy, Default)]
pub enum CreateOutcome {
    #[default]
    Store,
    Duplicate,
    Fail,
}

#[derive(Clone, Default)]
pub struct MockCredentialStore {
    users: Arc<Mutex<HashMap<String, StoredUser>>>,
    created: Arc<Mutex<Vec<NewUser>>>,
    lookups: Arc<AtomicUsize>,
    creates: Arc<AtomicUsize>,
    lookup_fails: bool,
    create_outcome: CreateOutcome,
}

impl MockCredentialStore {
    pub fn with_user(email: &str, name: &str, password: &str) -> Self {
        let store = Self::default();
        store.insert(email, name, password);
        store
    }

    pub fn failing_lookups(mut self) -> Self {
        self.lookup_fails = true;
        self
    }

    pub fn create_outcome(mut self, outcome: CreateOutcome) -> Self {
        self.create_outcome = outcome;
        self
    }

    pub fn insert(&self, email: &str, name: &str, password: &str) {
        let user = NewUser::new(parse_email(email), parse_name(name), Utc::now())
            .into_user(UserId::new());
        let stored = StoredUser {
            user,
            password_hash: mock_hash(password),
        };
        self.users
            .lock()
            .unwrap()
            .insert(email.to_owned(), stored);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn created_users(&self) -> Vec<NewUser> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl CredentialStore for MockCredentialStore {
    async fn create_user(
        &self,
        user: NewUser,
        password_hash: PasswordHash,
    ) -> Result<(), CredentialStoreError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        match self.create_outcome {
            CreateOutcome::Duplicate => return Err(CredentialStoreError::UserAlreadyExists),
            CreateOutcome::Fail => {
                return Err(CredentialStoreError::UnexpectedError(
                    "connection reset".to_owned(),
                ));
            }
            CreateOutcome::Store => {}
        }

        let email = user.email().as_ref().expose_secret().clone();
        self.created.lock().unwrap().push(user.clone());
        self.users.lock().unwrap().insert(
            email,
            StoredUser {
                user: user.into_user(UserId::new()),
                password_hash,
            },
        );
        Ok(())
    }

    async fn get_user_by_email(&self, email: &Email) -> Result<StoredUser, CredentialStoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.lookup_fails {
            return Err(CredentialStoreError::UnexpectedError(
                "connection reset".to_owned(),
            ));
        }
        self.users
            .lock()
            .unwrap()
            .get(email.as_ref().expose_secret())
            .cloned()
            .ok_or(CredentialStoreError::UserNotFound)
    }
}

#[derive(Clone, Default)]
pub struct MockTokenIssuer {
    issued: Arc<AtomicUsize>,
    refreshes: Arc<AtomicUsize>,
    fails: bool,
    fails_refresh: bool,
}

impl MockTokenIssuer {
    pub fn failing() -> Self {
        Self {
            fails: true,
            ..Self::default()
        }
    }

    /// Access tokens are minted, refresh tokens are not.
    pub fn failing_refresh() -> Self {
        Self {
            fails_refresh: true,
            ..Self::default()
        }
    }

    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }

    pub fn refreshes(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenIssuer for MockTokenIssuer {
    async fn generate_token(&self, _user_id: &UserId) -> Result<String, TokenIssuerError> {
        self.issued.fetch_add(1, Ordering::SeqCst);
        if self.fails {
            return Err(TokenIssuerError::UnexpectedError("signer offline".to_owned()));
        }
        Ok("tok-1".to_owned())
    }

    async fn generate_refresh_token(&self, user_id: &UserId) -> Result<String, TokenIssuerError> {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        if self.fails_refresh {
            return Err(TokenIssuerError::TokenError("refresh signer offline".to_owned()));
        }
        Ok(format!("refresh-{user_id}"))
    }

    async fn validate_token(&self, token: &str) -> Result<bool, TokenIssuerError> {
        Ok(token == "tok-1")
    }
}

/// Stores passwords as `hashed:<password>`.
#[derive(Clone, Default)]
pub struct MockPasswordHasher {
    hashes: Arc<AtomicUsize>,
    verifications: Arc<AtomicUsize>,
    fails: bool,
}

impl MockPasswordHasher {
    pub fn failing() -> Self {
        Self {
            fails: true,
            ..Self::default()
        }
    }

    pub fn hashes(&self) -> usize {
        self.hashes.load(Ordering::SeqCst)
    }

    pub fn verifications(&self) -> usize {
        self.verifications.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        self.hashes.fetch_add(1, Ordering::SeqCst);
        if self.fails {
            return Err(PasswordHasherError::UnexpectedError("no entropy".to_owned()));
        }
        Ok(mock_hash(password.as_ref().expose_secret()))
    }

    async fn verify(
        &self,
        password: &Password,
        expected: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        self.verifications.fetch_add(1, Ordering::SeqCst);
        if self.fails {
            return Err(PasswordHasherError::MalformedHash("garbage".to_owned()));
        }
        Ok(mock_hash(password.as_ref().expose_secret()).as_ref().expose_secret()
            == expected.as_ref().expose_secret())
    }
}

pub fn mock_hash(password: &str) -> PasswordHash {
    PasswordHash::new(Secret::from(format!("hashed:{password}")))
}

pub fn parse_email(email: &str) -> Email {
    Email::try_from(Secret::from(email.to_owned())).unwrap()
}

pub fn parse_name(name: &str) -> UserName {
    UserName::try_from(name.to_owned()).unwrap()
}
