use std::time::Duration;

use sigil_application::AuthCore;
use sigil_core::AuthContext;

/// Shared state handed to the auth routes.
#[derive(Clone)]
pub struct AuthState<S, T, H> {
    pub core: AuthCore<S, T, H>,
    pub request_timeout: Duration,
}

impl<S, T, H> AuthState<S, T, H> {
    pub fn new(core: AuthCore<S, T, H>, request_timeout: Duration) -> Self {
        Self {
            core,
            request_timeout,
        }
    }

    /// Context for one request. Dropping the request future cancels the
    /// in-flight collaborator call as well.
    pub fn request_context(&self) -> AuthContext {
        AuthContext::background().with_timeout(self.request_timeout)
    }
}
