//! Error handling for bounded encryption

use thiserror::Error;
use tokensmith_key::KeyError;

/// Cipher-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Plaintext does not fit in one RSA block
    #[error("Plaintext length {actual} exceeds RSA limit of {limit} bytes")]
    PayloadTooLarge {
        /// Plaintext length in bytes
        actual: usize,
        /// Largest plaintext the key accepts
        limit: usize,
    },

    /// Blank key or other unusable input
    #[error("{0}")]
    InvalidArgument(String),

    /// The recipient key did not load
    #[error(transparent)]
    Key(#[from] KeyError),

    /// RSA encryption failed
    #[error("Encryption error: {0}")]
    Encryption(String),
}

impl CipherError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type for cipher operations
pub type Result<T> = std::result::Result<T, CipherError>;
