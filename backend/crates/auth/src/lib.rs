//! Auth (Credential Management) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Credential entity, session claims, repository trait
//! - `application/` - Use cases and the credential service
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Signup with email + password
//! - Signin returning a signed, 24-hour session token (JWT, HS256)
//! - Password reset initiation (existence check and acknowledgement)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, clear text zeroized after use
//! - Signin never reveals whether an email is registered
//! - Email uniqueness is enforced by the store, not by the pre-check
//! - Internal failures are logged with their cause and answered without it

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{AuthConfig, ResetDisclosure};
pub use application::service::CredentialService;
pub use error::{AuthError, AuthResult};
pub use infra::{InMemoryCredentialRepository, PgCredentialRepository};
pub use presentation::router::credential_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
