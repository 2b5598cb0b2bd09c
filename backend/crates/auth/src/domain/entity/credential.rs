//! Credential Entity
//!
//! One registered account: its email key and the digest of its password.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::{account_id::AccountId, email::Email};

/// Credential record
///
/// `password_hash` never leaves the service layer: it is not serialized,
/// and its `Debug` output is redacted.
#[derive(Debug, Clone)]
pub struct Credential {
    /// Subject identifier embedded in session tokens
    pub account_id: AccountId,
    /// Unique key, immutable once stored
    pub email: Email,
    /// Argon2id PHC digest
    pub password_hash: HashedPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Credential {
    /// Create a new credential with a fresh account id
    pub fn new(email: Email, password_hash: HashedPassword) -> Self {
        Self {
            account_id: AccountId::new(),
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
