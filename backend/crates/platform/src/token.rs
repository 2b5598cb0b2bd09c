//! Signed Session Tokens
//!
//! Compact JWS (JWT) tokens signed with HMAC-SHA256.
//!
//! The signing secret is supplied from outside at startup and turned into
//! keys once. [`SigningSecret`] has no `Default`, and a [`TokenIssuer`]
//! cannot be built without one.

use std::fmt;

use base64::{Engine, engine::general_purpose};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Shortest accepted secret (RFC 7518 §3.2: key >= hash output size)
pub const MIN_SECRET_LENGTH: usize = 32;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Signing secret must be at least {min} bytes (got {actual})")]
    SecretTooShort { min: usize, actual: usize },

    #[error("Signing secret is not valid base64")]
    InvalidSecretEncoding(#[source] base64::DecodeError),

    #[error("Token signing failed: {0}")]
    SigningFailed(#[source] jsonwebtoken::errors::Error),

    #[error("Token rejected: {0}")]
    Rejected(#[source] jsonwebtoken::errors::Error),
}

// ============================================================================
// Signing Secret
// ============================================================================

/// HMAC key material, zeroized on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, TokenError> {
        if bytes.len() < MIN_SECRET_LENGTH {
            return Err(TokenError::SecretTooShort {
                min: MIN_SECRET_LENGTH,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes))
    }

    /// Decode a standard (padded) base64 secret, e.g. from an environment variable
    pub fn from_base64(encoded: &str) -> Result<Self, TokenError> {
        let bytes = general_purpose::STANDARD
            .decode(encoded.trim())
            .map_err(TokenError::InvalidSecretEncoding)?;
        Self::from_bytes(bytes)
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningSecret").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Issuer
// ============================================================================

/// Signs and checks tokens with one process-wide key
///
/// Cloning shares nothing mutable; clones sign identically.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenIssuer {
    pub fn new(secret: &SigningSecret) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Sign `claims` into a `header.payload.signature` string
    pub fn issue<C: Serialize>(&self, claims: &C) -> Result<String, TokenError> {
        jsonwebtoken::encode(&Header::new(ALGORITHM), claims, &self.encoding)
            .map_err(TokenError::SigningFailed)
    }

    /// Check signature and `exp`, then return the claims
    pub fn decode<C: DeserializeOwned>(&self, token: &str) -> Result<C, TokenError> {
        jsonwebtoken::decode::<C>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(TokenError::Rejected)
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("algorithm", &ALGORITHM)
            .finish()
    }
}
