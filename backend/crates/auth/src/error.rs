//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.
//!
//! Client-facing variants carry fixed messages. Internal variants keep their
//! cause for the log line written at response time; the response itself only
//! ever says "Internal server error".

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordHashError;
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Public detail for every 5xx response
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Credential store unreachable or failing
    #[error("Storage error: {0}")]
    Storage(String),

    /// An account with this email already exists
    #[error("Account already exists")]
    DuplicateAccount,

    /// Unknown email or wrong password; both answer identically
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No account for this email (reset flow only)
    #[error("Account not found")]
    AccountNotFound,

    /// Password could not be hashed
    #[error("Hashing error: {0}")]
    Hashing(String),

    /// Session token could not be signed
    #[error("Token issuance error: {0}")]
    TokenIssuance(#[source] TokenError),

    /// Stored password hash is unusable
    #[error("Stored password hash is corrupt")]
    CorruptDigest,

    /// Request body is not JSON or lacks a field
    #[error("Malformed request body: {0}")]
    MalformedRequest(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::DuplicateAccount | AuthError::MalformedRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::AccountNotFound => StatusCode::NOT_FOUND,
            AuthError::Storage(_)
            | AuthError::Hashing(_)
            | AuthError::TokenIssuance(_)
            | AuthError::CorruptDigest => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::DuplicateAccount | AuthError::MalformedRequest(_) => {
                ErrorKind::BadRequest
            }
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::AccountNotFound => ErrorKind::NotFound,
            AuthError::Storage(_)
            | AuthError::Hashing(_)
            | AuthError::TokenIssuance(_)
            | AuthError::CorruptDigest => ErrorKind::InternalServerError,
        }
    }

    pub fn is_internal(&self) -> bool {
        self.kind().is_server_error()
    }

    /// Message safe to put in a response body
    pub fn public_message(&self) -> String {
        if self.is_internal() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }

    /// Convert to AppError
    ///
    /// Client-facing variants carry a next-step hint. The hint for
    /// `InvalidCredentials` must stay the same whatever the cause.
    pub fn to_app_error(&self) -> AppError {
        let message = self.public_message();
        match self {
            AuthError::DuplicateAccount => {
                AppError::bad_request(message).with_action("Sign in or reset the password")
            }
            AuthError::InvalidCredentials => {
                AppError::unauthorized(message).with_action("Check the email and password")
            }
            AuthError::AccountNotFound => {
                AppError::not_found(message).with_action("Sign up with this email")
            }
            AuthError::MalformedRequest(_) => AppError::bad_request(message)
                .with_action("Send a JSON object with the required fields"),
            AuthError::Storage(_)
            | AuthError::Hashing(_)
            | AuthError::TokenIssuance(_)
            | AuthError::CorruptDigest => AppError::internal(message),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Storage(cause) => {
                tracing::error!(error = %cause, "Credential store error");
            }
            AuthError::Hashing(cause) => {
                tracing::error!(error = %cause, "Password hashing error");
            }
            AuthError::TokenIssuance(cause) => {
                tracing::error!(error = %cause, "Session token signing error");
            }
            AuthError::CorruptDigest => {
                tracing::error!("Stored password hash failed to parse");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid sign-in attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AuthError::DuplicateAccount
            }
            _ => AuthError::Storage(err.to_string()),
        }
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::MalformedRequest(rejection.body_text())
    }
}

impl From<PasswordHashError> for AuthError {
    fn from(err: PasswordHashError) -> Self {
        match err {
            PasswordHashError::CorruptDigest => AuthError::CorruptDigest,
            other => AuthError::Hashing(other.to_string()),
        }
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        AuthError::TokenIssuance(err)
    }
}
