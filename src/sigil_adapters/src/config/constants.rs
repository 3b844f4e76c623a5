pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const JWT_SECRET_ENV_VAR: &str = "SIGIL_AUTH__JWT__SECRET";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "SIGIL_AUTH__ALLOWED_ORIGINS";
    pub const DATABASE_URL_ENV_VAR: &str = "SIGIL_POSTGRES__URL";
}

pub const ENV_PREFIX: &str = "SIGIL";
pub const CONFIG_DIR: &str = "config";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const REQUEST_TIMEOUT_MS: i64 = 5_000;
    pub const ACCESS_TOKEN_TTL_SECONDS: i64 = 600;
    pub const REFRESH_TOKEN_TTL_SECONDS: i64 = 60 * 60 * 24 * 14;
    pub const POSTGRES_MAX_CONNECTIONS: u32 = 5;
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
