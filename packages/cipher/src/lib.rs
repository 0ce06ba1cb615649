//! # Tokensmith Cipher
//!
//! Bounded RSA encryption of small secrets.
//!
//! ```rust,ignore
//! use tokensmith_cipher::Cipher;
//!
//! let ciphertext_b64 = Cipher::rsa_pkcs1v15()
//!     .with_public_key_pem(pem)
//!     .encrypt(b"secret")?;
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod bounded;
pub mod error;

pub use api::{Cipher, RsaBuilder, RsaWithKey};
pub use bounded::{
    PKCS1V15_OVERHEAD, RSA_2048_MAX_PLAINTEXT, encrypt, encrypt_small_payload, encrypt_with_key,
    max_plaintext_len,
};
pub use error::{CipherError, Result};
