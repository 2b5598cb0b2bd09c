//! Sign In Use Case
//!
//! Verifies a credential and issues a signed session token.
//! No server-side session state is created.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use platform::password::{ClearTextPassword, PasswordHasherService};
use platform::token::TokenIssuer;

use crate::application::config::AuthConfig;
use crate::domain::entity::session_claims::SessionClaims;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug, Clone)]
pub struct SignInOutput {
    /// Signed session token
    pub token: String,
    /// Absolute expiry of `token`
    pub expires_at: DateTime<Utc>,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: CredentialRepository,
{
    repo: Arc<R>,
    hasher: Arc<PasswordHasherService>,
    issuer: Arc<TokenIssuer>,
    config: Arc<AuthConfig>,
}

impl<R> SignInUseCase<R>
where
    R: CredentialRepository,
{
    pub fn new(
        repo: Arc<R>,
        hasher: Arc<PasswordHasherService>,
        issuer: Arc<TokenIssuer>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            repo,
            hasher,
            issuer,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let email = Email::new(input.email);
        let password = ClearTextPassword::new(input.password);

        let credential = self.repo.find_by_email(&email).await?;
        let hasher = Arc::clone(&self.hasher);

        // Unknown email and wrong password must be indistinguishable, in the
        // answer and in the Argon2 work spent before it.
        let Some(credential) = credential else {
            tokio::task::spawn_blocking(move || hasher.verify_decoy(&password))
                .await
                .map_err(|e| AuthError::Hashing(e.to_string()))?;
            return Err(AuthError::InvalidCredentials);
        };

        let stored_hash = credential.password_hash.clone();
        let password_valid =
            tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
                .await
                .map_err(|e| AuthError::Hashing(e.to_string()))??;

        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let issued_at = Utc::now();
        let claims = SessionClaims::new(&credential, issued_at, self.config.session_ttl);
        let token = self.issuer.issue(&claims)?;

        let expires_at = claims
            .expires_at()
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        tracing::info!(
            account_id = %credential.account_id,
            expires_at = %expires_at,
            "Account signed in"
        );

        Ok(SignInOutput { token, expires_at })
    }
}
