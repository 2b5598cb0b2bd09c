//! Sign Up Use Case
//!
//! Registers a new credential.

use std::sync::Arc;

use platform::password::{ClearTextPassword, PasswordHasherService};

use crate::domain::entity::credential::Credential;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: CredentialRepository,
{
    repo: Arc<R>,
    hasher: Arc<PasswordHasherService>,
}

impl<R> SignUpUseCase<R>
where
    R: CredentialRepository,
{
    pub fn new(repo: Arc<R>, hasher: Arc<PasswordHasherService>) -> Self {
        Self { repo, hasher }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<()> {
        let email = Email::new(input.email);
        let password = ClearTextPassword::new(input.password);

        // Fast path only; the store's unique key settles races.
        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::DuplicateAccount);
        }

        // Argon2 is CPU-bound: keep it off the async workers.
        // `password` is moved in and zeroized when the closure returns.
        let hasher = Arc::clone(&self.hasher);
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))??;

        let credential = Credential::new(email, password_hash);

        // Persist
        self.repo.insert(&credential).await?;

        tracing::info!(account_id = %credential.account_id, "Account signed up");

        Ok(())
    }
}
