//! # Sigil - Credential Issuance Library
//!
//! This is a facade crate that re-exports all public APIs from the sigil components.
//! Use this crate to get access to login and registration in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, `AuthContext`, etc.
//! - **Ports**: `CredentialStore`, `TokenIssuer`, `PasswordHasher`
//! - **Auth core**: `AuthCore`, `LoginUseCase`, `RegisterUseCase`
//! - **Adapters**: `PostgresCredentialStore`, `JwtTokenIssuer`, `Argon2PasswordHasher`, etc.
//! - **Service**: `AuthService` - HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use sigil_core::*;
}

// Re-export most commonly used core types at the root level
pub use sigil_core::{
    AuthContext, CancelHandle, Email, NewUser, Password, PasswordHash, StoredUser, User,
    UserError, UserId, UserName,
};

// ============================================================================
// Ports
// ============================================================================

/// Collaborator trait definitions
pub mod ports {
    pub use sigil_core::{
        CredentialStore, CredentialStoreError, PasswordHasher, PasswordHasherError, TokenIssuer,
        TokenIssuerError,
    };
}

pub use ports::*;

// ============================================================================
// Auth Core (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use sigil_application::*;
}

pub use sigil_application::{
    AuthCore, AuthError, LoginCredentials, LoginResult, LoginUseCase, RegisterUseCase,
    Registration, TOKEN_TYPE_BEARER,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP routes
    pub mod http {
        pub use sigil_adapters::http::*;
    }

    /// Credential store implementations
    pub mod persistence {
        pub use sigil_adapters::persistence::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use sigil_adapters::hashing::*;
    }

    /// JWT token issuance
    pub mod token {
        pub use sigil_adapters::token::*;
    }

    /// Configuration
    pub mod config {
        pub use sigil_adapters::config::*;
    }
}

pub use sigil_adapters::{
    hashing::Argon2PasswordHasher,
    persistence::{HashMapCredentialStore, PostgresCredentialStore},
    token::JwtTokenIssuer,
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// Main auth service
pub use sigil_auth_service::{AuthService, configure_postgresql};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the ports
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
