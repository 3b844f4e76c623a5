use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::{get, post},
};
use sigil_adapters::{
    config::AllowedOrigins,
    http::{
        AuthState,
        routes::{health, login, register},
    },
};
use sigil_application::AuthCore;
use sigil_core::{CredentialStore, PasswordHasher, TokenIssuer};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Main authentication service that provides the login and registration routes
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Create a new AuthService around a constructed auth core
    ///
    /// # Arguments
    /// * `core` - Auth core holding the credential store, token issuer and password hasher
    /// * `request_timeout` - Deadline applied to every auth core call
    ///
    /// # Note on Architecture
    /// Collaborators implement Clone via internal Arc for thread-safe sharing,
    /// so cloning the core per request is cheap.
    pub fn new<S, T, H>(core: AuthCore<S, T, H>, request_timeout: Duration) -> Self
    where
        S: CredentialStore + Clone + 'static,
        T: TokenIssuer + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
    {
        let state = AuthState::new(core, request_timeout);

        let router = Router::new()
            .route("/login", post(login::<S, T, H>))
            .route("/register", post(register::<S, T, H>))
            .with_state(state)
            .route("/health", get(health));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthService into a router that can be nested into another application
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the auth service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
