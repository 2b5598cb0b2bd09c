//! Reset Password Use Case
//!
//! Initiates a password reset. Only checks that the account exists: no reset
//! token, no reset record, no mail. Delivery belongs to an outside notifier.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Reset password input
pub struct ResetPasswordInput {
    pub email: String,
}

/// Reset password output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetPasswordOutput {
    pub message: String,
}

/// Reset password use case
pub struct ResetPasswordUseCase<R>
where
    R: CredentialRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> ResetPasswordUseCase<R>
where
    R: CredentialRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Fails with `AccountNotFound` for unknown emails regardless of the
    /// disclosure policy; `CredentialService` decides what the caller sees.
    pub async fn execute(&self, input: ResetPasswordInput) -> AuthResult<ResetPasswordOutput> {
        let email = Email::new(input.email);

        if !self.repo.exists_by_email(&email).await? {
            return Err(AuthError::AccountNotFound);
        }

        tracing::info!("Password reset initiated");

        Ok(self.acknowledgement())
    }

    pub fn acknowledgement(&self) -> ResetPasswordOutput {
        ResetPasswordOutput {
            message: self.config.reset_message.clone(),
        }
    }
}
