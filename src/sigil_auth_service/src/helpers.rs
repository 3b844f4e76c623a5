use sigil_adapters::{config::PostgresSetting, persistence::PostgresCredentialStore};
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Connect to PostgreSQL and apply pending migrations
///
/// # Returns
/// A credential store backed by the configured database
pub async fn configure_postgresql(
    setting: &PostgresSetting,
) -> Result<PostgresCredentialStore, sqlx::Error> {
    let pg_pool = get_postgres_pool(setting.url.expose_secret(), setting.max_connections).await?;

    let store = PostgresCredentialStore::new(pg_pool);
    store.migrate().await?;

    Ok(store)
}

/// Create a PostgreSQL connection pool
///
/// # Arguments
/// * `url` - Database connection URL
/// * `max_connections` - Upper bound on pooled connections
pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}
