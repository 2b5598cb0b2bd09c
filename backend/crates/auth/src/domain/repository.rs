//! Repository Traits
//!
//! Interfaces for credential persistence. Implementations are in the
//! infrastructure layer.

use crate::domain::entity::credential::Credential;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Credential store adapter
///
/// Implementations must enforce email uniqueness on `insert` and report a
/// collision as `AuthError::DuplicateAccount`. Callers may check
/// `exists_by_email` first, but only the store's constraint is authoritative.
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Check if a credential exists for this email
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Find credential by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Credential>>;

    /// Store a new credential
    async fn insert(&self, credential: &Credential) -> AuthResult<()>;
}
