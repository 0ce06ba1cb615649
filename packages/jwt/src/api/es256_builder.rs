//! ES256 JWT builder

use crate::config::SigningConfig;
use crate::crypto;
use crate::error::{JwtError, JwtResult};
use crate::issuer::TokenIssuer;
use crate::request::SignedTokenRequest;
use crate::types::VerifiedToken;
use chrono::Utc;
use tokensmith_common::LoggingTransformer;
use tokensmith_key::{ResolvedIdentity, load_ec_public};
use zeroize::Zeroizing;

type SignHandler = Box<dyn Fn(JwtResult<String>) -> String + Send + Sync>;
type VerifyHandler = Box<dyn Fn(JwtResult<VerifiedToken>) -> VerifiedToken + Send + Sync>;

/// ES256 JWT builder - initial state
#[derive(Debug, Default)]
pub struct Es256Builder {
    config: SigningConfig,
}

impl Es256Builder {
    /// Builder with default lifetimes
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override token lifetimes
    #[must_use]
    pub fn with_config(mut self, config: SigningConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the PKCS#8 private key PEM used for signing
    ///
    /// The key is loaded when signing so a malformed key is reported with the
    /// token variant's error prefix.
    #[must_use]
    pub fn with_private_key_pem(self, private_key_pem: impl Into<String>) -> Es256WithPrivateKey {
        Es256WithPrivateKey {
            issuer: TokenIssuer::new(self.config),
            private_key_pem: Zeroizing::new(private_key_pem.into()),
            result_handler: None,
        }
    }

    /// Sign with the private key of a resolved certificate
    #[must_use]
    pub fn with_identity(self, identity: &ResolvedIdentity) -> Es256WithPrivateKey {
        self.with_private_key_pem(identity.private_key_pem())
    }

    /// Set the SubjectPublicKeyInfo PEM used for verification
    #[must_use]
    pub fn with_public_key_pem(self, public_key_pem: impl Into<String>) -> Es256WithPublicKey {
        Es256WithPublicKey {
            public_key_pem: public_key_pem.into(),
            result_handler: None,
        }
    }
}

/// ES256 builder with private key configured
pub struct Es256WithPrivateKey {
    issuer: TokenIssuer,
    private_key_pem: Zeroizing<String>,
    result_handler: Option<SignHandler>,
}

impl Es256WithPrivateKey {
    /// Add result handler; it receives every signing outcome
    #[must_use]
    pub fn on_result<F>(mut self, handler: F) -> Self
    where
        F: Fn(JwtResult<String>) -> String + Send + Sync + 'static,
    {
        self.result_handler = Some(Box::new(handler));
        self
    }

    /// Sign `request`
    ///
    /// # Errors
    /// - [`JwtError::InvalidArgument`] for blank request fields
    /// - [`JwtError::TokenSigning`] when the key fails to load or signing fails
    pub fn sign(&self, request: &SignedTokenRequest) -> JwtResult<String> {
        let result = self.issuer.issue_with_pem(request, &self.private_key_pem);

        match &self.result_handler {
            Some(handler) => Ok(handler(result)),
            None => result,
        }
    }
}

/// ES256 builder with public key configured
pub struct Es256WithPublicKey {
    public_key_pem: String,
    result_handler: Option<VerifyHandler>,
}

impl Es256WithPublicKey {
    /// Add result handler; it receives every verification outcome
    #[must_use]
    pub fn on_result<F>(mut self, handler: F) -> Self
    where
        F: Fn(JwtResult<VerifiedToken>) -> VerifiedToken + Send + Sync + 'static,
    {
        self.result_handler = Some(Box::new(handler));
        self
    }

    /// Verify `token` against the configured public key
    ///
    /// # Errors
    /// - [`JwtError::Key`] when the public key does not load
    /// - [`JwtError::InvalidToken`], [`JwtError::InvalidSignature`] or
    ///   [`JwtError::TokenExpired`] from verification
    pub fn verify<T>(&self, token: T) -> JwtResult<VerifiedToken>
    where
        T: AsRef<str>,
    {
        let result = load_ec_public(&self.public_key_pem)
            .map_err(JwtError::from)
            .and_then(|key| crypto::es256_verify(&key, token.as_ref(), Utc::now().timestamp()));

        match &self.result_handler {
            Some(handler) => Ok(handler(result)),
            None => {
                if let Err(e) = &result {
                    LoggingTransformer::log_rejected("jwt_verification", &e.to_string());
                }
                result
            }
        }
    }
}
