//! In-Memory Repository
//!
//! Test double for the credential store. Enforces the same uniqueness rule
//! as the PostgreSQL table, and can be switched into a failing mode to
//! exercise storage-error paths.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use crate::domain::entity::credential::Credential;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Credential store kept in a `HashMap` keyed by email
#[derive(Clone, Default)]
pub struct InMemoryCredentialRepository {
    records: Arc<RwLock<HashMap<Email, Credential>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `AuthError::Storage`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored credentials
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn check_available(&self) -> AuthResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AuthError::Storage("in-memory store marked unavailable".to_string()));
        }
        Ok(())
    }
}

impl CredentialRepository for InMemoryCredentialRepository {
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        self.check_available()?;
        Ok(self.records.read().await.contains_key(email))
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Credential>> {
        self.check_available()?;
        Ok(self.records.read().await.get(email).cloned())
    }

    async fn insert(&self, credential: &Credential) -> AuthResult<()> {
        self.check_available()?;
        let mut records = self.records.write().await;
        if records.contains_key(&credential.email) {
            return Err(AuthError::DuplicateAccount);
        }
        records.insert(credential.email.clone(), credential.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::HashedPassword;

    fn credential(email: &str) -> Credential {
        Credential::new(Email::new(email), HashedPassword::from_stored("$argon2id$stub"))
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryCredentialRepository::new();
        let stored = credential("user@example.com");
        repo.insert(&stored).await.unwrap();

        let email = Email::new("user@example.com");
        assert!(repo.exists_by_email(&email).await.unwrap());

        let found = repo.find_by_email(&email).await.unwrap().unwrap();
        assert_eq!(found.account_id, stored.account_id);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate() {
        let repo = InMemoryCredentialRepository::new();
        repo.insert(&credential("user@example.com")).await.unwrap();

        let result = repo.insert(&credential("user@example.com")).await;
        assert!(matches!(result, Err(AuthError::DuplicateAccount)));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let repo = InMemoryCredentialRepository::new();
        repo.insert(&credential("user@example.com")).await.unwrap();

        let other_case = Email::new("User@example.com");
        assert!(!repo.exists_by_email(&other_case).await.unwrap());
        repo.insert(&credential("User@example.com")).await.unwrap();
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_unavailable() {
        let repo = InMemoryCredentialRepository::new();
        repo.set_unavailable(true);

        let email = Email::new("user@example.com");
        assert!(matches!(
            repo.exists_by_email(&email).await,
            Err(AuthError::Storage(_))
        ));
        assert!(matches!(
            repo.insert(&credential("user@example.com")).await,
            Err(AuthError::Storage(_))
        ));

        repo.set_unavailable(false);
        assert!(!repo.exists_by_email(&email).await.unwrap());
    }
}
