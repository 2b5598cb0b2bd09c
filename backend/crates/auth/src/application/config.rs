//! Application Configuration
//!
//! Configuration for the Auth application layer. Secrets are not part of
//! it: the signing key arrives already built inside `TokenIssuer`.

use chrono::Duration;

/// Acknowledgement returned by reset initiation
pub const DEFAULT_RESET_MESSAGE: &str = "Password reset initiated. Please check your email.";

/// How reset initiation answers for an email with no account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetDisclosure {
    /// 404 Not Found for unknown emails
    #[default]
    Reveal,
    /// Same 200 acknowledgement as for known emails, matching signin's
    /// refusal to say whether an account exists
    Conceal,
}

impl std::str::FromStr for ResetDisclosure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reveal" => Ok(ResetDisclosure::Reveal),
            "conceal" => Ok(ResetDisclosure::Conceal),
            other => Err(format!("unknown reset disclosure policy: {other}")),
        }
    }
}

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session token lifetime (24 hours)
    pub session_ttl: Duration,
    /// Reset-initiation answer for unknown emails
    pub reset_disclosure: ResetDisclosure,
    /// Body message of a successful reset initiation
    pub reset_message: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl: Duration::hours(24),
            reset_disclosure: ResetDisclosure::default(),
            reset_message: DEFAULT_RESET_MESSAGE.to_string(),
        }
    }
}
