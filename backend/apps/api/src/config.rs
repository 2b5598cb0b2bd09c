//! Server Configuration
//!
//! Everything the binary needs from the environment, read once at startup.

use std::net::SocketAddr;
use std::str::FromStr;

use anyhow::{Context, anyhow};
use auth::{AuthConfig, ResetDisclosure};
use chrono::TimeDelta;
use platform::password::HashCost;
use platform::token::SigningSecret;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";

pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub token_secret: SigningSecret,
    pub hash_cost: HashCost,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source; missing optional keys take defaults
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let secret_b64 = lookup("AUTH_TOKEN_SECRET").context("AUTH_TOKEN_SECRET must be set")?;
        let token_secret =
            SigningSecret::from_base64(&secret_b64).context("AUTH_TOKEN_SECRET is invalid")?;

        let bind_addr = parse_or(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR.parse()?)?;

        let defaults = HashCost::default();
        let hash_cost = HashCost {
            memory_kib: parse_or(&lookup, "PASSWORD_HASH_MEMORY_KIB", defaults.memory_kib)?,
            iterations: parse_or(&lookup, "PASSWORD_HASH_ITERATIONS", defaults.iterations)?,
            parallelism: parse_or(&lookup, "PASSWORD_HASH_PARALLELISM", defaults.parallelism)?,
            ..defaults
        };

        let mut auth = AuthConfig::default();
        if let Some(secs) = lookup("AUTH_SESSION_TTL_SECS") {
            let secs: i64 = secs
                .trim()
                .parse()
                .context("AUTH_SESSION_TTL_SECS must be an integer")?;
            auth.session_ttl = TimeDelta::try_seconds(secs)
                .filter(|ttl| *ttl > TimeDelta::zero())
                .ok_or_else(|| anyhow!("AUTH_SESSION_TTL_SECS out of range: {secs}"))?;
        }
        if let Some(policy) = lookup("AUTH_RESET_DISCLOSURE") {
            auth.reset_disclosure = policy.parse::<ResetDisclosure>().map_err(|e| anyhow!(e))?;
        }

        Ok(Self {
            database_url,
            bind_addr,
            token_secret,
            hash_cost,
            auth,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        None => Ok(default),
    }
}
