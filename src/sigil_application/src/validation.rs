//! Input checks that run before any collaborator is touched.

use sigil_core::{Email, MIN_PASSWORD_LENGTH, Password, UserName};

use crate::{
    error::AuthError,
    use_cases::{login::LoginCredentials, register::Registration},
};

pub fn validate_login_credentials(
    credentials: LoginCredentials,
) -> Result<(Email, Password), AuthError> {
    let email = Email::parse_login(credentials.email)?;
    let password = Password::try_from(credentials.password)?;
    Ok((email, password))
}

pub fn validate_registration(
    registration: Registration,
) -> Result<(Email, UserName, Password), AuthError> {
    let email = Email::try_from(registration.email)?;
    let name = UserName::try_from(registration.name)?;
    let password = Password::try_from(registration.password)?;

    if !password.meets_registration_policy() {
        return Err(AuthError::InvalidInput(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }

    Ok((email, name, password))
}
