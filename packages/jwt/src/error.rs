//! JWT error types

use thiserror::Error;
use tokensmith_key::KeyError;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// JWT error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Key loading or signing failed while producing a token
    #[error("{context}: {reason}")]
    TokenSigning {
        /// Operation prefix, e.g. "Failed to generate JWT"
        context: &'static str,
        /// Underlying failure message
        reason: String,
    },

    /// Blank required input or wrong key kind
    #[error("{0}")]
    InvalidArgument(String),

    /// Token is not a well-formed compact JWS
    #[error("Invalid JWT token: {0}")]
    InvalidToken(String),

    /// Signature did not verify
    #[error("Invalid JWT signature")]
    InvalidSignature,

    /// `exp` is in the past
    #[error("JWT token has expired")]
    TokenExpired,

    /// Header or claims could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Key loading failed outside of a signing call
    #[error(transparent)]
    Key(#[from] KeyError),
}

impl JwtError {
    /// Wrap a lower-level failure under an operation prefix
    #[must_use]
    pub fn token_signing(context: &'static str, reason: impl std::fmt::Display) -> Self {
        JwtError::TokenSigning {
            context,
            reason: reason.to_string(),
        }
    }

    /// Create an invalid argument error
    #[inline]
    #[must_use]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        JwtError::InvalidArgument(msg.into())
    }

    /// Create an invalid token error
    #[inline]
    #[must_use]
    pub fn invalid_token(msg: &str) -> Self {
        JwtError::InvalidToken(msg.to_string())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        JwtError::Serialization(msg.to_string())
    }
}
