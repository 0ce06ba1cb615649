//! Structured logging infrastructure
//!
//! Provides `env_logger`-based logging with secure handling of identifiers.
//! Client identifiers and token subjects are never written in clear text; they
//! are replaced by a truncated SHA-256 digest that stays stable across calls.

use log::{debug, error, info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging helpers used across the token issuance crates
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging (call once at application startup)
    ///
    /// Configure levels via the `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - every issued token and loaded key
    /// - `RUST_LOG=info` - recommended for production
    /// - `RUST_LOG=tokensmith_jwt=debug,tokensmith_cipher=warn` - per crate
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a successfully issued token
    pub fn log_token_issued(variant: &str, subject: &str, expires_at: Option<i64>) {
        let subject_hash = Self::secure_hash_key(subject);
        match expires_at {
            Some(exp) => debug!("Issued {variant} token (subject_hash: {subject_hash}, exp: {exp})"),
            None => debug!("Issued {variant} token (subject_hash: {subject_hash}, exp: none)"),
        }
    }

    /// Log a resolved certificate identity
    pub fn log_identity_resolved(client_id: &str, has_public_key: bool) {
        let client_hash = Self::secure_hash_key(client_id);
        debug!("Resolved certificate identity (client_hash: {client_hash}, public_key: {has_public_key})");
    }

    /// Log a bounded encryption call
    pub fn log_encryption(plaintext_len: usize, limit: usize) {
        debug!("RSA PKCS#1 v1.5 encryption ({plaintext_len}/{limit} bytes)");
    }

    /// Log a rejected request before any cryptography ran
    pub fn log_rejected(operation: &str, reason: &str) {
        warn!("Rejected {operation}: {reason}");
    }

    /// Secure logging of cryptographic errors
    ///
    /// Logs the operation and the error type, never the error payload, since
    /// parser messages can echo fragments of key material.
    pub fn log_crypto_error<E: std::error::Error>(operation: &str, _error: &E) {
        error!(
            "Cryptographic operation failed: {} (error_type: {})",
            operation,
            std::any::type_name::<E>()
        );
    }

    /// Truncated SHA-256 digest for log correlation
    ///
    /// Returns `#` followed by the first 12 hex characters.
    pub fn secure_hash_key(key: &str) -> String {
        let hash = Sha256::digest(key.as_bytes());
        let hex_hash = hex::encode(hash);
        format!("#{}", &hex_hash[..12])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_key_hashing() {
        LoggingTransformer::init_test();

        let hash1 = LoggingTransformer::secure_hash_key("client-123");
        let hash2 = LoggingTransformer::secure_hash_key("client-456");

        assert_ne!(hash1, hash2);
        assert_eq!(hash1, LoggingTransformer::secure_hash_key("client-123"));

        assert!(hash1.starts_with('#'));
        assert_eq!(hash1.len(), 13);
        assert!(!hash1.contains("client"));
    }

    #[test]
    fn test_logging_operations() {
        LoggingTransformer::init_test();

        LoggingTransformer::log_token_issued("session", "session", Some(1_700_000_000));
        LoggingTransformer::log_token_issued("enrollment", "client-1", None);
        LoggingTransformer::log_identity_resolved("client-1", true);
        LoggingTransformer::log_encryption(5, 245);
        LoggingTransformer::log_rejected("encryption", "plaintext too large");
        LoggingTransformer::log_crypto_error("decode", &std::fmt::Error);
    }
}
