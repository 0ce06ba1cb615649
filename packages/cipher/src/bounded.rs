//! Bounded RSA encryption
//!
//! One PKCS#1 v1.5 block per call. The plaintext limit follows from the
//! modulus size; there is no chunking, so larger secrets need hybrid
//! encryption elsewhere.

use crate::error::{CipherError, Result};
use base64::{Engine, engine::general_purpose::STANDARD};
use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Encrypt, RsaPublicKey};
use tokensmith_common::LoggingTransformer;
use tokensmith_key::load_rsa_public;

/// PKCS#1 v1.5 padding overhead in bytes
pub const PKCS1V15_OVERHEAD: usize = 11;

/// Plaintext limit for a 2048-bit modulus
pub const RSA_2048_MAX_PLAINTEXT: usize = 245;

/// Largest plaintext that fits one PKCS#1 v1.5 block for a modulus of `modulus_bytes`
#[must_use]
pub const fn max_plaintext_len(modulus_bytes: usize) -> usize {
    modulus_bytes.saturating_sub(PKCS1V15_OVERHEAD)
}

/// Encrypt `plaintext` for the RSA public key in `rsa_public_pem`
///
/// Returns the ciphertext as standard padded Base64.
///
/// # Errors
/// - [`CipherError::InvalidArgument`] for a blank PEM
/// - [`CipherError::Key`] when the key does not load
/// - [`CipherError::PayloadTooLarge`] when `plaintext` exceeds [`max_plaintext_len`]
pub fn encrypt(plaintext: &[u8], rsa_public_pem: &str) -> Result<String> {
    if rsa_public_pem.trim().is_empty() {
        LoggingTransformer::log_rejected("rsa_encrypt", "blank public key");
        return Err(CipherError::invalid_argument(
            "RSA public key PEM must not be blank",
        ));
    }
    let key = load_rsa_public(rsa_public_pem)?;
    encrypt_with_key(plaintext, &key)
}

/// Encrypt `plaintext` for an already loaded key
///
/// # Errors
/// - [`CipherError::PayloadTooLarge`] when `plaintext` exceeds [`max_plaintext_len`]
/// - [`CipherError::Encryption`] if the RSA primitive fails
pub fn encrypt_with_key(plaintext: &[u8], key: &RsaPublicKey) -> Result<String> {
    let limit = max_plaintext_len(key.size());
    if plaintext.len() > limit {
        LoggingTransformer::log_rejected("rsa_encrypt", "plaintext exceeds one block");
        return Err(CipherError::PayloadTooLarge {
            actual: plaintext.len(),
            limit,
        });
    }

    LoggingTransformer::log_encryption(plaintext.len(), limit);
    let ciphertext = key
        .encrypt(&mut OsRng, Pkcs1v15Encrypt, plaintext)
        .map_err(|e| {
            LoggingTransformer::log_crypto_error("rsa_encrypt", &e);
            CipherError::Encryption(e.to_string())
        })?;
    Ok(STANDARD.encode(ciphertext))
}

/// Encrypt the UTF-8 bytes of `plaintext`
///
/// # Errors
/// See [`encrypt`].
pub fn encrypt_small_payload(rsa_public_pem: &str, plaintext: &str) -> Result<String> {
    encrypt(plaintext.as_bytes(), rsa_public_pem)
}
