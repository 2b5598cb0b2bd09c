//! Session Claims
//!
//! Identity and expiry carried inside a signed session token. Never stored.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::credential::Credential;

/// JWT claim set of a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the account id
    pub sub: String,
    pub email: String,
    /// Issued at (seconds since epoch)
    pub iat: i64,
    /// Expires at (seconds since epoch)
    pub exp: i64,
}

impl SessionClaims {
    /// Claims for `credential`, valid for `ttl` from `issued_at`
    pub fn new(credential: &Credential, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: credential.account_id.to_string(),
            email: credential.email.to_string(),
            iat: issued_at.timestamp(),
            exp: issued_at.timestamp().saturating_add(ttl.num_seconds()),
        }
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::email::Email;
    use platform::password::HashedPassword;

    #[test]
    fn test_claims_from_credential() {
        let credential = Credential::new(
            Email::new("user@example.com"),
            HashedPassword::from_stored("$argon2id$stub"),
        );
        let now = Utc::now();
        let claims = SessionClaims::new(&credential, now, Duration::hours(24));

        assert_eq!(claims.sub, credential.account_id.to_string());
        assert_eq!(claims.email, "user@example.com");
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
        assert_eq!(claims.expires_at().unwrap().timestamp(), (now + Duration::hours(24)).timestamp());
    }
}
