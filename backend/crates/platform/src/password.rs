//! Password Hashing and Verification
//!
//! - Argon2id hashing (memory-hard, recommended by OWASP)
//! - Fresh random salt on every call
//! - Tunable cost (iterations, memory, lanes)
//! - Zeroization of the clear text
//! - Constant-time verification
//!
//! Digests are PHC strings, so the cost a digest was produced with travels
//! with it and verification keeps working after the configured cost changes.

use std::fmt;

use argon2::password_hash::{self, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// OWASP baseline for Argon2id: m=19456 KiB
pub const DEFAULT_MEMORY_KIB: u32 = 19_456;

/// OWASP baseline for Argon2id: t=2
pub const DEFAULT_ITERATIONS: u32 = 2;

/// OWASP baseline for Argon2id: p=1
pub const DEFAULT_PARALLELISM: u32 = 1;

/// Longest clear text the hasher accepts, in bytes
pub const DEFAULT_MAX_PASSWORD_BYTES: usize = 1024;

// ============================================================================
// Error Types
// ============================================================================

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Clear text is longer than the hasher accepts
    #[error("Password must be at most {max} bytes (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Cost parameters rejected by Argon2
    #[error("Invalid hash cost: {0}")]
    InvalidCost(String),

    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored digest cannot be parsed or was not produced by this hasher
    #[error("Invalid password hash format")]
    CorruptDigest,
}

// ============================================================================
// Cost
// ============================================================================

/// Work factor of the hasher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCost {
    /// Memory cost in KiB (m)
    pub memory_kib: u32,
    /// Number of passes (t)
    pub iterations: u32,
    /// Degree of parallelism (p)
    pub parallelism: u32,
    /// Upper bound on the clear text length
    pub max_password_bytes: usize,
}

impl Default for HashCost {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_MEMORY_KIB,
            iterations: DEFAULT_ITERATIONS,
            parallelism: DEFAULT_PARALLELISM,
            max_password_bytes: DEFAULT_MAX_PASSWORD_BYTES,
        }
    }
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
///
/// No policy is applied here; what counts as an acceptable password is
/// decided before the value reaches the hasher.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// Holds algorithm, version, parameters, salt and hash in a single string.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Parse and validate a PHC string
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::CorruptDigest)?;
        Ok(Self { hash })
    }

    /// Wrap a value read back from storage without parsing it
    ///
    /// A malformed value is reported by [`PasswordHasherService::verify`] as
    /// [`PasswordHashError::CorruptDigest`].
    pub fn from_stored(s: impl Into<String>) -> Self {
        Self { hash: s.into() }
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Hasher
// ============================================================================

/// Argon2id hasher bound to one cost configuration
///
/// Immutable after construction, so one instance is shared across requests.
#[derive(Clone)]
pub struct PasswordHasherService {
    argon2: Argon2<'static>,
    cost: HashCost,
    /// Digest of a random secret, verified when there is no stored digest
    decoy: HashedPassword,
}

impl PasswordHasherService {
    pub fn new(cost: HashCost) -> Result<Self, PasswordHashError> {
        let params = Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None)
            .map_err(|e| PasswordHashError::InvalidCost(e.to_string()))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let decoy_secret = SaltString::generate(OsRng);
        let decoy_salt = SaltString::generate(OsRng);
        let decoy = argon2
            .hash_password(decoy_secret.as_str().as_bytes(), &decoy_salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(Self {
            argon2,
            cost,
            decoy: HashedPassword {
                hash: decoy.to_string(),
            },
        })
    }

    pub fn cost(&self) -> HashCost {
        self.cost
    }

    /// Hash with a fresh 128-bit salt
    pub fn hash(&self, password: &ClearTextPassword) -> Result<HashedPassword, PasswordHashError> {
        if password.len() > self.cost.max_password_bytes {
            return Err(PasswordHashError::TooLong {
                max: self.cost.max_password_bytes,
                actual: password.len(),
            });
        }

        let salt = SaltString::generate(OsRng);

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }

    /// Verify a password against a stored digest
    ///
    /// The comparison is constant-time. The parameters embedded in the
    /// digest are used, not the ones this hasher was built with.
    ///
    /// ## Returns
    /// - `Ok(true)` on match
    /// - `Ok(false)` on mismatch
    /// - `Err(CorruptDigest)` when the digest is unusable
    pub fn verify(
        &self,
        password: &ClearTextPassword,
        hashed: &HashedPassword,
    ) -> Result<bool, PasswordHashError> {
        let parsed = PasswordHash::new(&hashed.hash).map_err(|_| PasswordHashError::CorruptDigest)?;

        // Never stored, so it cannot match.
        if password.len() > self.cost.max_password_bytes {
            return Ok(false);
        }

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(_) => Err(PasswordHashError::CorruptDigest),
        }
    }

    /// Spend the same work as [`verify`](Self::verify) without a stored digest
    ///
    /// Used when the account is unknown, so that the lookup outcome does not
    /// show in the response time. Always a mismatch.
    pub fn verify_decoy(&self, password: &ClearTextPassword) -> bool {
        matches!(self.verify(password, &self.decoy), Ok(true))
    }
}

impl fmt::Debug for PasswordHasherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHasherService")
            .field("cost", &self.cost)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap_hasher() -> PasswordHasherService {
        PasswordHasherService::new(HashCost {
            memory_kib: 64,
            iterations: 1,
            parallelism: 1,
            ..HashCost::default()
        })
        .unwrap()
    }

    fn password(s: &str) -> ClearTextPassword {
        ClearTextPassword::new(s.to_string())
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = cheap_hasher();
        let hashed = hasher.hash(&password("TestPassword123!")).unwrap();

        assert!(hasher.verify(&password("TestPassword123!"), &hashed).unwrap());
        assert!(!hasher.verify(&password("WrongPassword123!"), &hashed).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = cheap_hasher();
        let first = hasher.hash(&password("same input")).unwrap();
        let second = hasher.hash(&password("same input")).unwrap();

        assert_ne!(first.as_phc_string(), second.as_phc_string());
        assert!(hasher.verify(&password("same input"), &first).unwrap());
        assert!(hasher.verify(&password("same input"), &second).unwrap());
    }

    #[test]
    fn test_digest_is_argon2id_phc() {
        let hashed = cheap_hasher().hash(&password("TestPassword123!")).unwrap();
        assert!(hashed.as_phc_string().starts_with("$argon2id$v=19$m=64,t=1,p=1$"));
    }

    #[test]
    fn test_verify_uses_digest_parameters() {
        let old = cheap_hasher();
        let hashed = old.hash(&password("TestPassword123!")).unwrap();

        let newer = PasswordHasherService::new(HashCost {
            memory_kib: 128,
            iterations: 2,
            parallelism: 1,
            ..HashCost::default()
        })
        .unwrap();
        assert!(newer.verify(&password("TestPassword123!"), &hashed).unwrap());
    }

    #[test]
    fn test_decoy_costs_like_a_stored_digest() {
        let hasher = cheap_hasher();
        assert!(hasher.decoy.as_phc_string().starts_with("$argon2id$v=19$m=64,t=1,p=1$"));

        assert!(!hasher.verify_decoy(&password("TestPassword123!")));
        assert!(!hasher.verify_decoy(&password("")));
    }

    #[test]
    fn test_password_too_long() {
        let hasher = PasswordHasherService::new(HashCost {
            memory_kib: 64,
            iterations: 1,
            parallelism: 1,
            max_password_bytes: 16,
        })
        .unwrap();

        let result = hasher.hash(&password(&"a".repeat(17)));
        assert!(matches!(
            result,
            Err(PasswordHashError::TooLong { max: 16, actual: 17 })
        ));
    }

    #[test]
    fn test_invalid_cost() {
        let result = PasswordHasherService::new(HashCost {
            memory_kib: 64,
            iterations: 0,
            parallelism: 1,
            ..HashCost::default()
        });
        assert!(matches!(result, Err(PasswordHashError::InvalidCost(_))));
    }

    #[test]
    fn test_corrupt_digest() {
        let hasher = cheap_hasher();
        let stored = HashedPassword::from_stored("not_a_valid_hash");
        let result = hasher.verify(&password("anything"), &stored);
        assert!(matches!(result, Err(PasswordHashError::CorruptDigest)));

        assert!(matches!(
            HashedPassword::from_phc_string("not_a_valid_hash"),
            Err(PasswordHashError::CorruptDigest)
        ));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let hasher = cheap_hasher();
        let hashed = hasher.hash(&password("TestPassword123!")).unwrap();

        let restored = HashedPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(hasher.verify(&password("TestPassword123!"), &restored).unwrap());
    }

    #[test]
    fn test_debug_redaction() {
        let debug_output = format!("{:?}", password("secret"));
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let hashed = cheap_hasher().hash(&password("secret")).unwrap();
        let debug_output = format!("{:?}", hashed);
        assert!(!debug_output.contains("argon2id"));
    }
}
