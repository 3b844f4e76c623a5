use std::time::Duration;

use axum::http::HeaderValue;
use config::{Config, ConfigError, Environment, File, builder::DefaultState};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{CONFIG_DIR, ENV_PREFIX, env, prod};
use crate::token::TokenConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct AuthServiceSetting {
    pub app: AppSetting,
    pub auth: AuthSetting,
    /// Without a database url the service falls back to the in-memory store.
    pub postgres: Option<PostgresSetting>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSetting {
    pub address: String,
    pub request_timeout_ms: u64,
}

impl AppSetting {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSetting {
    pub allowed_origins: AllowedOrigins,
    pub jwt: JwtSetting,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSetting {
    pub secret: Secret<String>,
    pub access_ttl_seconds: i64,
    pub refresh_ttl_seconds: i64,
}

impl JwtSetting {
    pub fn token_config(&self) -> TokenConfig {
        TokenConfig {
            secret: self.secret.clone(),
            access_ttl_in_seconds: self.access_ttl_seconds,
            refresh_ttl_in_seconds: self.refresh_ttl_seconds,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSetting {
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    prod::POSTGRES_MAX_CONNECTIONS
}

/// CORS origins allowed to call the service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .is_ok_and(|origin| self.0.iter().any(|allowed| allowed == origin))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AuthServiceSetting {
    /// Load settings from `config/base.json`, `config/{APP_ENVIRONMENT}.json`
    /// and `SIGIL_`-prefixed environment variables, in increasing priority.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment =
            std::env::var(env::APP_ENVIRONMENT_ENV_VAR).unwrap_or_else(|_| "local".to_owned());

        Self::defaults()?
            .add_source(File::with_name(&format!("{CONFIG_DIR}/base")).required(false))
            .add_source(File::with_name(&format!("{CONFIG_DIR}/{environment}")).required(false))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    /// `SIGIL_AUTH__JWT__SECRET` overrides `auth.jwt.secret`, and so on.
    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("auth.allowed_origins")
            .try_parsing(true)
    }

    fn defaults() -> Result<config::ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.address", prod::APP_ADDRESS)?
            .set_default("app.request_timeout_ms", prod::REQUEST_TIMEOUT_MS)?
            .set_default("auth.allowed_origins", Vec::<String>::new())?
            .set_default("auth.jwt.access_ttl_seconds", prod::ACCESS_TOKEN_TTL_SECONDS)?
            .set_default(
                "auth.jwt.refresh_ttl_seconds",
                prod::REFRESH_TOKEN_TTL_SECONDS,
            )
    }
}
