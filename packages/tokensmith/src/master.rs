//! Master entry point

use crate::error::Result;
#[cfg(feature = "jwt")]
use tokensmith_common::EnvConfig;
use tokensmith_common::LoggingTransformer;
use tokensmith_key::ResolvedIdentity;

/// Unified entry point for tokensmith operations
///
/// Example: `TokenSmith::jwt().with_identity(&id).sign(&request)`
pub struct TokenSmith;

impl TokenSmith {
    /// Install the `env_logger` backend; later calls are no-ops
    pub fn init_logging() {
        LoggingTransformer::init();
    }

    /// Resolve a certificate document from JSON bytes
    ///
    /// # Errors
    /// Returns [`crate::Error::Key`] for missing fields or malformed keys.
    pub fn identity(json: &[u8]) -> Result<ResolvedIdentity> {
        Ok(tokensmith_key::identity::resolve(json)?)
    }

    /// ES256 token builder with default lifetimes
    #[cfg(feature = "jwt")]
    #[must_use]
    pub fn jwt() -> tokensmith_jwt::Es256Builder {
        tokensmith_jwt::Jwt::es256()
    }

    /// ES256 token builder with lifetimes read from the environment and `./.env`
    ///
    /// # Errors
    /// - [`crate::Error::Config`] when `.env` exists but is unreadable
    /// - [`crate::Error::Jwt`] when a configured lifetime is not positive
    #[cfg(feature = "jwt")]
    pub fn jwt_from_env() -> Result<tokensmith_jwt::Es256Builder> {
        Self::jwt_with_env(&EnvConfig::load()?)
    }

    /// ES256 token builder with lifetimes read from `env`
    ///
    /// # Errors
    /// Returns [`crate::Error::Jwt`] when a configured lifetime is not positive.
    #[cfg(feature = "jwt")]
    pub fn jwt_with_env(env: &EnvConfig) -> Result<tokensmith_jwt::Es256Builder> {
        let config = tokensmith_jwt::SigningConfig::from_env(env)?;
        Ok(tokensmith_jwt::Jwt::es256().with_config(config))
    }

    /// RSA PKCS#1 v1.5 encryption builder
    #[cfg(feature = "cipher")]
    #[must_use]
    pub fn cipher() -> tokensmith_cipher::RsaBuilder {
        tokensmith_cipher::Cipher::rsa_pkcs1v15()
    }
}
