//! Token issuance engine
//!
//! Stateless: each call maps `(request, key, config, now)` to one signed token.

use crate::claims;
use crate::config::SigningConfig;
use crate::crypto::es256_sign;
use crate::error::{JwtError, JwtResult};
use crate::request::SignedTokenRequest;
use chrono::{DateTime, Utc};
use p256::ecdsa::SigningKey;
use tokensmith_common::LoggingTransformer;
use tokensmith_key::{KeyKind, KeyMaterial, load_ec_private};

/// Signs [`SignedTokenRequest`]s with ES256
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenIssuer {
    config: SigningConfig,
}

impl TokenIssuer {
    /// Issuer with the given lifetimes
    #[must_use]
    pub fn new(config: SigningConfig) -> Self {
        Self { config }
    }

    /// Configured lifetimes
    #[must_use]
    pub fn config(&self) -> &SigningConfig {
        &self.config
    }

    /// Sign `request` at the current wall-clock time
    ///
    /// # Errors
    /// - [`JwtError::InvalidArgument`] for blank inputs or a non-signing key
    /// - [`JwtError::TokenSigning`] if signing fails
    pub fn issue(&self, request: &SignedTokenRequest, key: &KeyMaterial) -> JwtResult<String> {
        self.issue_at(request, key, Utc::now())
    }

    /// Sign `request` as if issued at `now`
    ///
    /// # Errors
    /// See [`TokenIssuer::issue`].
    pub fn issue_at(
        &self,
        request: &SignedTokenRequest,
        key: &KeyMaterial,
        now: DateTime<Utc>,
    ) -> JwtResult<String> {
        request.validate()?;
        let signing_key = key.as_signing_key().ok_or_else(|| {
            JwtError::invalid_argument(format!(
                "ES256 signing requires an {}, got {}",
                KeyKind::EcPrivateP256,
                key.kind()
            ))
        })?;
        self.sign(request, signing_key, now.timestamp())
    }

    /// Load the private key from PEM, then sign at the current time
    ///
    /// Key loading failures are reported as [`JwtError::TokenSigning`] under
    /// the variant's prefix.
    ///
    /// # Errors
    /// See [`TokenIssuer::issue`].
    pub fn issue_with_pem(&self, request: &SignedTokenRequest, private_key_pem: &str) -> JwtResult<String> {
        self.issue_with_pem_at(request, private_key_pem, Utc::now())
    }

    /// Load the private key from PEM, then sign as if issued at `now`
    ///
    /// # Errors
    /// See [`TokenIssuer::issue_with_pem`].
    pub fn issue_with_pem_at(
        &self,
        request: &SignedTokenRequest,
        private_key_pem: &str,
        now: DateTime<Utc>,
    ) -> JwtResult<String> {
        request.validate()?;
        let signing_key = load_ec_private(private_key_pem).map_err(|e| {
            LoggingTransformer::log_crypto_error(request.variant_name(), &e);
            JwtError::token_signing(request.failure_context(), e)
        })?;
        self.sign(request, &signing_key, now.timestamp())
    }

    fn sign(&self, request: &SignedTokenRequest, signing_key: &SigningKey, now: i64) -> JwtResult<String> {
        let (header, claims) = claims::build(request, &self.config, now);
        let token = es256_sign(signing_key, &header, &claims).map_err(|e| {
            LoggingTransformer::log_crypto_error(request.variant_name(), &e);
            JwtError::token_signing(request.failure_context(), e)
        })?;
        LoggingTransformer::log_token_issued(request.variant_name(), &claims.sub, claims.exp);
        Ok(token)
    }
}
