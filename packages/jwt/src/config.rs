//! Token lifetime configuration

use crate::error::{JwtError, JwtResult};
use chrono::Duration;
use tokensmith_common::EnvConfig;

/// Client identity token lifetime: 3652 days
pub const DEFAULT_CLIENT_IDENTITY_TTL_SECS: i64 = 315_532_800;
/// Session token lifetime: one hour
pub const DEFAULT_SESSION_TTL_SECS: i64 = 3600;
/// Access delegation token lifetime: one hour
pub const DEFAULT_ACCESS_TTL_SECS: i64 = 3600;

/// Environment variable overriding the client identity lifetime in seconds
pub const CLIENT_IDENTITY_TTL_ENV: &str = "TOKENSMITH_CLIENT_IDENTITY_TTL_SECS";
/// Environment variable overriding the session lifetime in seconds
pub const SESSION_TTL_ENV: &str = "TOKENSMITH_SESSION_TTL_SECS";
/// Environment variable overriding the access lifetime in seconds
pub const ACCESS_TTL_ENV: &str = "TOKENSMITH_ACCESS_TTL_SECS";

/// Per-variant token lifetimes
///
/// Enrollment tokens carry no expiry and have no entry here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigningConfig {
    client_identity_ttl: Duration,
    session_ttl: Duration,
    access_ttl: Duration,
}

impl SigningConfig {
    /// Build a config from explicit lifetimes
    ///
    /// # Errors
    /// Returns [`JwtError::InvalidArgument`] if any lifetime is zero or negative.
    pub fn new(
        client_identity_ttl: Duration,
        session_ttl: Duration,
        access_ttl: Duration,
    ) -> JwtResult<Self> {
        ensure_positive("client identity", client_identity_ttl)?;
        ensure_positive("session", session_ttl)?;
        ensure_positive("access", access_ttl)?;
        Ok(Self {
            client_identity_ttl,
            session_ttl,
            access_ttl,
        })
    }

    /// Read lifetimes from `TOKENSMITH_*_TTL_SECS`, falling back to defaults
    ///
    /// # Errors
    /// Returns [`JwtError::InvalidArgument`] if a configured lifetime is not positive.
    pub fn from_env(env: &EnvConfig) -> JwtResult<Self> {
        Self::new(
            ttl_from_env(env, CLIENT_IDENTITY_TTL_ENV, DEFAULT_CLIENT_IDENTITY_TTL_SECS)?,
            ttl_from_env(env, SESSION_TTL_ENV, DEFAULT_SESSION_TTL_SECS)?,
            ttl_from_env(env, ACCESS_TTL_ENV, DEFAULT_ACCESS_TTL_SECS)?,
        )
    }

    /// Client identity token lifetime
    #[must_use]
    pub fn client_identity_ttl(&self) -> Duration {
        self.client_identity_ttl
    }

    /// Session token lifetime
    #[must_use]
    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    /// Access delegation token lifetime
    #[must_use]
    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }
}

impl Default for SigningConfig {
    fn default() -> Self {
        Self {
            client_identity_ttl: Duration::seconds(DEFAULT_CLIENT_IDENTITY_TTL_SECS),
            session_ttl: Duration::seconds(DEFAULT_SESSION_TTL_SECS),
            access_ttl: Duration::seconds(DEFAULT_ACCESS_TTL_SECS),
        }
    }
}

fn ttl_from_env(env: &EnvConfig, key: &str, default_secs: i64) -> JwtResult<Duration> {
    let secs = env.get_i64_or(key, default_secs);
    Duration::try_seconds(secs)
        .ok_or_else(|| JwtError::invalid_argument(format!("{key} is out of range: {secs}")))
}

fn ensure_positive(name: &str, ttl: Duration) -> JwtResult<()> {
    if ttl <= Duration::zero() {
        return Err(JwtError::invalid_argument(format!(
            "{name} token lifetime must be positive, got {}s",
            ttl.num_seconds()
        )));
    }
    Ok(())
}
