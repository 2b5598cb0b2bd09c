//! HTTP Handlers
//!
//! Each handler turns one request into exactly one `(status, body)` pair.
//! Errors go through `AuthError`'s `IntoResponse`, which logs the cause and
//! answers with a problem document carrying only the public message. Body
//! rejections take the same route, so every failure has one shape.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use crate::application::{CredentialService, ResetPasswordInput, SignInInput, SignUpInput};
use crate::domain::repository::CredentialRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    ResetPasswordRequest, ResetPasswordResponse, SignInRequest, SignInResponse, SignUpRequest,
};

// ============================================================================
// Sign Up
// ============================================================================

/// POST /signup
pub async fn sign_up<R>(
    State(service): State<CredentialService<R>>,
    body: Result<Json<SignUpRequest>, JsonRejection>,
) -> AuthResult<StatusCode>
where
    R: CredentialRepository + Send + Sync + 'static,
{
    let Json(req) = body?;

    service
        .sign_up(SignUpInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(StatusCode::CREATED)
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /signin
pub async fn sign_in<R>(
    State(service): State<CredentialService<R>>,
    body: Result<Json<SignInRequest>, JsonRejection>,
) -> AuthResult<Json<SignInResponse>>
where
    R: CredentialRepository + Send + Sync + 'static,
{
    let Json(req) = body?;

    let output = service
        .sign_in(SignInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(SignInResponse {
        token: output.token,
    }))
}

// ============================================================================
// Reset Password
// ============================================================================

/// POST /reset-password
pub async fn reset_password<R>(
    State(service): State<CredentialService<R>>,
    body: Result<Json<ResetPasswordRequest>, JsonRejection>,
) -> AuthResult<Json<ResetPasswordResponse>>
where
    R: CredentialRepository + Send + Sync + 'static,
{
    let Json(req) = body?;

    let output = service
        .initiate_reset(ResetPasswordInput { email: req.email })
        .await?;

    Ok(Json(ResetPasswordResponse {
        message: output.message,
    }))
}
