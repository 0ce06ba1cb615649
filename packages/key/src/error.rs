//! Error handling for key loading and certificate resolution

use std::fmt;
use thiserror::Error;

/// Which side of a key pair an operation was loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    /// PKCS#8 private key
    PrivateKey,
    /// SubjectPublicKeyInfo public key
    PublicKey,
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRole::PrivateKey => f.write_str("private key"),
            KeyRole::PublicKey => f.write_str("public key"),
        }
    }
}

/// Key and identity errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Malformed PEM body, malformed DER, or algorithm/curve mismatch
    #[error("Failed to load {role}: {reason}")]
    KeyFormat {
        /// Key being loaded when the failure happened
        role: KeyRole,
        /// Decoder message
        reason: String,
    },

    /// Required certificate field missing or document unreadable
    #[error("{0}")]
    IdentityResolution(String),

    /// Blank or otherwise unusable caller input
    #[error("{0}")]
    InvalidArgument(String),
}

impl KeyError {
    /// Create a key format error for `role`
    pub fn key_format(role: KeyRole, reason: impl fmt::Display) -> Self {
        Self::KeyFormat {
            role,
            reason: reason.to_string(),
        }
    }

    /// Create an identity resolution error
    pub fn identity(msg: impl Into<String>) -> Self {
        Self::IdentityResolution(msg.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type for key operations
pub type Result<T> = std::result::Result<T, KeyError>;
