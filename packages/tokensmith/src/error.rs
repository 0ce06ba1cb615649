//! Unified error type

use std::path::PathBuf;
use thiserror::Error;

/// Errors from any tokensmith component
#[derive(Debug, Error)]
pub enum Error {
    /// Key loading or certificate resolution
    #[error(transparent)]
    Key(#[from] tokensmith_key::KeyError),

    /// Token issuance or verification
    #[cfg(feature = "jwt")]
    #[error(transparent)]
    Jwt(#[from] tokensmith_jwt::JwtError),

    /// Bounded encryption
    #[cfg(feature = "cipher")]
    #[error(transparent)]
    Cipher(#[from] tokensmith_cipher::CipherError),

    /// Environment configuration
    #[error(transparent)]
    Config(#[from] tokensmith_common::ConfigError),

    /// Expected key file does not exist
    #[error("Public key file not found: {}", .0.display())]
    PublicKeyNotFound(PathBuf),

    /// File exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Offending path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for the unified API
pub type Result<T> = std::result::Result<T, Error>;
