use axum::{Json, body::Bytes, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use sigil_application::LoginCredentials;
use sigil_core::{CredentialStore, PasswordHasher, TokenIssuer};

use super::{error::AuthApiError, parse_body};
use crate::http::AuthState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginHttpResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<S, T, H>(
    State(state): State<AuthState<S, T, H>>,
    body: Bytes,
) -> Result<impl IntoResponse, AuthApiError>
where
    S: CredentialStore + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let request: LoginRequest = parse_body(&body)?;

    let credentials = LoginCredentials {
        email: request.email,
        password: request.password,
    };

    let result = state
        .core
        .login(&state.request_context(), credentials)
        .await?;

    let response = LoginHttpResponse {
        access_token: result.access_token.expose_secret().clone(),
        refresh_token: result.refresh_token.expose_secret().clone(),
        token_type: result.token_type.to_owned(),
    };

    Ok((StatusCode::OK, Json(response)))
}
