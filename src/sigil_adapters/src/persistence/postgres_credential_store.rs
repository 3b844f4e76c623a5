use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use sigil_core::{
    CredentialStore, CredentialStoreError, Email, NewUser, PasswordHash, StoredUser, User, UserId,
    UserName,
};
use sqlx::{FromRow, PgPool, migrate::MigrateError};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresCredentialStore { pool }
    }

    /// Apply the bundled schema migrations.
    pub async fn migrate(&self) -> Result<(), MigrateError> {
        sqlx::migrate!().run(&self.pool).await
    }
}

#[derive(FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for StoredUser {
    type Error = CredentialStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = Email::try_from(Secret::from(row.email))
            .map_err(|e| CredentialStoreError::UnexpectedError(e.to_string()))?;
        let name = UserName::try_from(row.name)
            .map_err(|e| CredentialStoreError::UnexpectedError(e.to_string()))?;

        Ok(StoredUser {
            user: User::new(
                UserId::from(row.id),
                email,
                name,
                row.created_at,
                row.updated_at,
            ),
            password_hash: PasswordHash::new(Secret::from(row.password_hash)),
        })
    }
}

#[async_trait::async_trait]
impl CredentialStore for PostgresCredentialStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn create_user(
        &self,
        user: NewUser,
        password_hash: PasswordHash,
    ) -> Result<(), CredentialStoreError> {
        let query = sqlx::query(
            r#"
                INSERT INTO users (id, email, name, password_hash, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(*UserId::new().as_uuid())
        .bind(user.email().as_ref().expose_secret())
        .bind(user.name().as_ref())
        .bind(password_hash.as_ref().expose_secret())
        .bind(user.created_at())
        .bind(user.updated_at());

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return CredentialStoreError::UserAlreadyExists;
                }
            }
            CredentialStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(())
    }

    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn get_user_by_email(&self, email: &Email) -> Result<StoredUser, CredentialStoreError> {
        let query = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, email, name, password_hash, created_at, updated_at
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret());

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CredentialStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(CredentialStoreError::UserNotFound);
        };

        StoredUser::try_from(row)
    }
}
