//! Credential Service
//!
//! Holds the shared, read-only dependencies and runs one use case per call.
//! Nothing here is locked: concurrent calls only meet in the store.

use std::sync::Arc;

use platform::password::PasswordHasherService;
use platform::token::TokenIssuer;

use crate::application::config::{AuthConfig, ResetDisclosure};
use crate::application::reset_password::{
    ResetPasswordInput, ResetPasswordOutput, ResetPasswordUseCase,
};
use crate::application::sign_in::{SignInInput, SignInOutput, SignInUseCase};
use crate::application::sign_up::{SignUpInput, SignUpUseCase};
use crate::domain::repository::CredentialRepository;
use crate::error::{AuthError, AuthResult};

/// Entry point for signup, signin and reset initiation
pub struct CredentialService<R>
where
    R: CredentialRepository,
{
    repo: Arc<R>,
    hasher: Arc<PasswordHasherService>,
    issuer: Arc<TokenIssuer>,
    config: Arc<AuthConfig>,
}

impl<R> Clone for CredentialService<R>
where
    R: CredentialRepository,
{
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            hasher: Arc::clone(&self.hasher),
            issuer: Arc::clone(&self.issuer),
            config: Arc::clone(&self.config),
        }
    }
}

impl<R> CredentialService<R>
where
    R: CredentialRepository,
{
    pub fn new(
        repo: R,
        hasher: PasswordHasherService,
        issuer: TokenIssuer,
        config: AuthConfig,
    ) -> Self {
        Self {
            repo: Arc::new(repo),
            hasher: Arc::new(hasher),
            issuer: Arc::new(issuer),
            config: Arc::new(config),
        }
    }

    /// Register `email` with `password`
    pub async fn sign_up(&self, input: SignUpInput) -> AuthResult<()> {
        SignUpUseCase::new(self.repo.clone(), self.hasher.clone())
            .execute(input)
            .await
    }

    /// Verify a credential and issue a session token
    pub async fn sign_in(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        SignInUseCase::new(
            self.repo.clone(),
            self.hasher.clone(),
            self.issuer.clone(),
            self.config.clone(),
        )
        .execute(input)
        .await
    }

    /// Start a password reset, applying the configured disclosure policy
    pub async fn initiate_reset(
        &self,
        input: ResetPasswordInput,
    ) -> AuthResult<ResetPasswordOutput> {
        let use_case = ResetPasswordUseCase::new(self.repo.clone(), self.config.clone());

        match use_case.execute(input).await {
            Err(AuthError::AccountNotFound)
                if self.config.reset_disclosure == ResetDisclosure::Conceal =>
            {
                tracing::debug!("Password reset requested for unknown account");
                Ok(use_case.acknowledgement())
            }
            other => other,
        }
    }

    /// Issuer used for session tokens, e.g. to validate them elsewhere
    pub fn issuer(&self) -> &TokenIssuer {
        &self.issuer
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}
