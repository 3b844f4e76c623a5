use std::time::Duration;

use secrecy::Secret;
use serde::Serialize;
use sigil_adapters::{
    config::test::APP_ADDRESS,
    hashing::Argon2PasswordHasher,
    persistence::HashMapCredentialStore,
    token::{JwtTokenIssuer, TokenConfig},
};
use sigil_application::AuthCore;
use sigil_auth_service::AuthService;
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub token_issuer: JwtTokenIssuer,
}

impl TestApp {
    pub async fn new() -> Self {
        let token_issuer = JwtTokenIssuer::new(TokenConfig {
            secret: Secret::from("test-secret".to_owned()),
            access_ttl_in_seconds: 600,
            refresh_ttl_in_seconds: 3600,
        });

        let core = AuthCore::new(
            HashMapCredentialStore::new(),
            token_issuer.clone(),
            Argon2PasswordHasher::new(),
        );
        let auth_service = AuthService::new(core, Duration::from_secs(30));

        let listener = TcpListener::bind(APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(auth_service.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
            token_issuer,
        }
    }

    pub async fn get_health(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/health", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login<Body: Serialize>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .post(format!("{}/login", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_register<Body: Serialize>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .post(format!("{}/register", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_raw(&self, path: &str, body: &'static str) -> reqwest::Response {
        self.http_client
            .post(format!("{}{path}", self.address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
