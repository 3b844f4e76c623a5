use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use sigil_core::{
    CredentialStore, CredentialStoreError, Email, NewUser, PasswordHash, StoredUser, UserId,
};

#[derive(Default, Clone)]
pub struct HashMapCredentialStore {
    users: Arc<RwLock<HashMap<Email, StoredUser>>>,
}

impl HashMapCredentialStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl CredentialStore for HashMapCredentialStore {
    async fn create_user(
        &self,
        user: NewUser,
        password_hash: PasswordHash,
    ) -> Result<(), CredentialStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.email()) {
            return Err(CredentialStoreError::UserAlreadyExists);
        }
        let email = user.email().clone();
        let stored = StoredUser {
            user: user.into_user(UserId::new()),
            password_hash,
        };
        users.insert(email, stored);
        Ok(())
    }

    async fn get_user_by_email(&self, email: &Email) -> Result<StoredUser, CredentialStoreError> {
        let users = self.users.read().await;
        users
            .get(email)
            .cloned()
            .ok_or(CredentialStoreError::UserNotFound)
    }
}
