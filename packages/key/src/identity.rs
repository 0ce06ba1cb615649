//! Certificate document resolution
//!
//! `certificate.json` files have shipped with several spellings of the same
//! field over time. Each semantic field has an ordered alias list and the
//! first non-blank string value wins. Unknown fields are ignored.

use crate::error::{KeyError, Result};
use crate::material::{load_ec_private, load_ec_public, public_key_der_base64};
use p256::ecdsa::SigningKey;
use serde_json::{Map, Value};
use std::fmt;
use tokensmith_common::LoggingTransformer;
use zeroize::Zeroizing;

/// Client identifier aliases, in precedence order
pub const CLIENT_ID_ALIASES: [&str; 3] = ["clientIdentifier", "clientId", "client_id"];
/// Public key aliases, in precedence order
pub const PUBLIC_KEY_ALIASES: [&str; 2] = ["publicKey", "public_key"];
/// Private key aliases, in precedence order
pub const PRIVATE_KEY_ALIASES: [&str; 2] = ["privateKey", "private_key"];

/// Untyped certificate document as read from JSON
#[derive(Debug, Clone, Default)]
pub struct RawCertificateDocument {
    fields: Map<String, Value>,
}

impl RawCertificateDocument {
    /// Parse UTF-8 JSON bytes
    ///
    /// # Errors
    /// Returns [`KeyError::IdentityResolution`] when the bytes are not a JSON object.
    pub fn from_slice(json: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(json)
            .map_err(|e| KeyError::identity(format!("Failed to parse certificate JSON: {e}")))?;
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(KeyError::identity(format!(
                "Failed to parse certificate JSON: expected an object, found {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Resolved client identifier, if any alias is non-blank
    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        self.first_non_blank(&CLIENT_ID_ALIASES)
    }

    /// Resolved public key PEM, if any alias is non-blank
    #[must_use]
    pub fn public_key(&self) -> Option<&str> {
        self.first_non_blank(&PUBLIC_KEY_ALIASES)
    }

    /// Resolved private key PEM, if any alias is non-blank
    #[must_use]
    pub fn private_key(&self) -> Option<&str> {
        self.first_non_blank(&PRIVATE_KEY_ALIASES)
    }

    /// Resolve into a canonical identity, validating both keys
    ///
    /// The public key (when present) is loaded before the private key. Loader
    /// errors are returned as-is.
    ///
    /// # Errors
    /// - [`KeyError::IdentityResolution`] when the client identifier or private key is missing
    /// - [`KeyError::KeyFormat`] when a present key does not load
    pub fn resolve(&self) -> Result<ResolvedIdentity> {
        let client_id = self
            .client_id()
            .ok_or_else(|| KeyError::identity("Certificate JSON missing client identifier field"))?;

        let public_key_pem = match self.public_key() {
            Some(pem) => {
                load_ec_public(pem)?;
                Some(Zeroizing::new(pem.to_string()))
            }
            None => None,
        };

        let private_key_pem = self
            .private_key()
            .ok_or_else(|| KeyError::identity("Certificate JSON missing private key field"))?;
        load_ec_private(private_key_pem)?;

        LoggingTransformer::log_identity_resolved(client_id, public_key_pem.is_some());

        Ok(ResolvedIdentity {
            client_id: client_id.to_string(),
            public_key_pem,
            private_key_pem: Zeroizing::new(private_key_pem.to_string()),
        })
    }

    fn first_non_blank(&self, aliases: &[&str]) -> Option<&str> {
        aliases
            .iter()
            .filter_map(|alias| self.fields.get(*alias).and_then(Value::as_str))
            .find(|value| !value.trim().is_empty())
    }
}

/// Parse and resolve a certificate document in one step
///
/// # Errors
/// See [`RawCertificateDocument::from_slice`] and [`RawCertificateDocument::resolve`].
pub fn resolve(json: &[u8]) -> Result<ResolvedIdentity> {
    RawCertificateDocument::from_slice(json)?.resolve()
}

/// Canonical identity record
///
/// PEM strings are wiped from memory on drop.
#[derive(Clone)]
pub struct ResolvedIdentity {
    client_id: String,
    public_key_pem: Option<Zeroizing<String>>,
    private_key_pem: Zeroizing<String>,
}

impl ResolvedIdentity {
    /// Client identifier
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Public key PEM, when the document carried one
    #[must_use]
    pub fn public_key_pem(&self) -> Option<&str> {
        self.public_key_pem.as_ref().map(|pem| pem.as_str())
    }

    /// Private key PEM
    #[must_use]
    pub fn private_key_pem(&self) -> &str {
        &self.private_key_pem
    }

    /// Load a fresh signing key from the private key PEM
    ///
    /// # Errors
    /// Returns [`KeyError::KeyFormat`] if the PEM no longer loads.
    pub fn signing_key(&self) -> Result<SigningKey> {
        load_ec_private(&self.private_key_pem)
    }

    /// Public key as standard Base64 SubjectPublicKeyInfo DER
    ///
    /// # Errors
    /// - [`KeyError::InvalidArgument`] when the document had no public key
    /// - [`KeyError::KeyFormat`] when the key cannot be re-encoded
    pub fn public_key_base64(&self) -> Result<String> {
        let pem = self.public_key_pem().ok_or_else(|| {
            KeyError::invalid_argument(
                "Certificate JSON did not include a public key field; cannot export public key",
            )
        })?;
        public_key_der_base64(pem)
    }
}

impl fmt::Debug for ResolvedIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedIdentity")
            .field("client_id", &self.client_id)
            .field("has_public_key", &self.public_key_pem.is_some())
            .finish_non_exhaustive()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
