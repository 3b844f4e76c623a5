use color_eyre::eyre::Result;
use sigil_adapters::{
    config::AuthServiceSetting, hashing::Argon2PasswordHasher,
    persistence::HashMapCredentialStore, token::JwtTokenIssuer,
};
use sigil_application::AuthCore;
use sigil_auth_service::{AuthService, configure_postgresql, tracing::init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let config = AuthServiceSetting::load()?;
    let request_timeout = config.app.request_timeout();

    let token_issuer = JwtTokenIssuer::new(config.auth.jwt.token_config());
    let password_hasher = Argon2PasswordHasher::new();

    let auth_service = match &config.postgres {
        Some(postgres) => {
            let credential_store = configure_postgresql(postgres).await?;
            AuthService::new(
                AuthCore::new(credential_store, token_issuer, password_hasher),
                request_timeout,
            )
        }
        None => {
            tracing::warn!("No database configured, users are kept in memory");
            AuthService::new(
                AuthCore::new(HashMapCredentialStore::new(), token_issuer, password_hasher),
                request_timeout,
            )
        }
    };

    let allowed_origins = config.auth.allowed_origins.clone();
    let allowed_origins = (!allowed_origins.is_empty()).then_some(allowed_origins);

    let listener = TcpListener::bind(config.app.address.as_str()).await?;
    tracing::info!("Starting auth service...");

    auth_service
        .run_standalone(listener, allowed_origins)
        .await?;

    Ok(())
}
