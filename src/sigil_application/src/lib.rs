pub mod auth_core;
pub mod error;
pub mod use_cases;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth_core::AuthCore;
pub use error::AuthError;
pub use use_cases::{
    login::{LoginCredentials, LoginResult, LoginUseCase, TOKEN_TYPE_BEARER},
    register::{Registration, RegisterUseCase},
};
