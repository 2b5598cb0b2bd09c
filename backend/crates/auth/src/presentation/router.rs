//! Auth Router

use axum::{Router, routing::post};

use crate::application::CredentialService;
use crate::domain::repository::CredentialRepository;
use crate::presentation::handlers;

/// Create the credential router for any repository implementation
pub fn credential_router<R>(service: CredentialService<R>) -> Router
where
    R: CredentialRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/signin", post(handlers::sign_in::<R>))
        .route("/reset-password", post(handlers::reset_password::<R>))
        .with_state(service)
}
