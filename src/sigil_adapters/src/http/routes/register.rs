use axum::{Json, body::Bytes, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use sigil_application::Registration;
use sigil_core::{CredentialStore, PasswordHasher, TokenIssuer};

use super::{error::AuthApiError, parse_body};
use crate::http::AuthState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterHttpResponse {
    pub message: String,
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<S, T, H>(
    State(state): State<AuthState<S, T, H>>,
    body: Bytes,
) -> Result<impl IntoResponse, AuthApiError>
where
    S: CredentialStore + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let request: RegisterRequest = parse_body(&body)?;

    let registration = Registration {
        email: request.email,
        name: request.name,
        password: request.password,
    };

    state
        .core
        .register(&state.request_context(), registration)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterHttpResponse {
            message: String::from("User registered successfully"),
        }),
    ))
}
