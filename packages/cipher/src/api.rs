//! Cipher builder API
//!
//! Usage: `Cipher::rsa_pkcs1v15().with_public_key_pem(pem).encrypt(data)`

use crate::bounded;
use crate::error::Result;

/// Direct builder entry point
pub struct Cipher;

impl Cipher {
    /// RSA PKCS#1 v1.5 single-block encryption
    #[must_use]
    pub fn rsa_pkcs1v15() -> RsaBuilder {
        RsaBuilder
    }
}

/// RSA builder - initial state
#[derive(Debug, Default)]
pub struct RsaBuilder;

impl RsaBuilder {
    /// Set the recipient's SubjectPublicKeyInfo PEM
    #[must_use]
    pub fn with_public_key_pem(self, public_key_pem: impl Into<String>) -> RsaWithKey {
        RsaWithKey {
            public_key_pem: public_key_pem.into(),
        }
    }
}

/// RSA builder with recipient key configured
#[derive(Debug, Clone)]
pub struct RsaWithKey {
    public_key_pem: String,
}

impl RsaWithKey {
    /// Encrypt `data` into standard Base64 ciphertext
    ///
    /// # Errors
    /// See [`bounded::encrypt`].
    pub fn encrypt<T: AsRef<[u8]>>(&self, data: T) -> Result<String> {
        bounded::encrypt(data.as_ref(), &self.public_key_pem)
    }
}
