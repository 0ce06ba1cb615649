//! # Tokensmith
//!
//! Credential handling for device enrollment clients: resolve a
//! `certificate.json`, sign ES256 tokens with it, and encrypt small secrets
//! for an RSA recipient.
//!
//! ```rust,ignore
//! use tokensmith::{SignedTokenRequest, TokenSmith};
//!
//! let identity = tokensmith::files::read_identity("certificate.json")?;
//! let token = TokenSmith::jwt()
//!     .with_identity(&identity)
//!     .sign(&SignedTokenRequest::client_identity(identity.client_id()))?;
//!
//! let secret = TokenSmith::cipher()
//!     .with_public_key_pem(rsa_pem)
//!     .encrypt(b"wifi-password")?;
//! ```
//!
//! Features `jwt` and `cipher` are on by default.

#![forbid(unsafe_code)]

mod error;
pub mod files;
mod master;

pub use error::{Error, Result};
pub use master::TokenSmith;

pub use tokensmith_common::{EnvConfig, LoggingTransformer};
pub use tokensmith_key::{
    KeyError, KeyKind, KeyMaterial, RawCertificateDocument, ResolvedIdentity, pem,
};

#[cfg(feature = "jwt")]
pub use tokensmith_jwt::{
    JwtError, SignedTokenRequest, SigningConfig, TokenIssuer, VerifiedToken,
};

#[cfg(feature = "cipher")]
pub use tokensmith_cipher::{CipherError, max_plaintext_len};
