pub mod error;
pub mod health;
pub mod login;
pub mod register;

pub use error::{AuthApiError, ErrorResponse};
pub use health::health;
pub use login::{LoginHttpResponse, LoginRequest, login};
pub use register::{RegisterHttpResponse, RegisterRequest, register};

use axum::body::Bytes;
use serde::de::DeserializeOwned;

/// Decode a JSON request body, rejecting an empty body before anything else.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AuthApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AuthApiError::EmptyBody);
    }
    serde_json::from_slice(body).map_err(|_| AuthApiError::InvalidBody)
}
