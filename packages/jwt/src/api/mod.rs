//! Builder API
//!
//! `Jwt::es256()` is the entry point; the builder moves through typed states
//! so a token can only be signed once a private key is configured.

pub mod es256_builder;

pub use es256_builder::{Es256Builder, Es256WithPrivateKey, Es256WithPublicKey};

/// Direct builder entry point
pub struct Jwt;

impl Jwt {
    /// ES256 builder with default lifetimes
    #[must_use]
    pub fn es256() -> Es256Builder {
        Es256Builder::new()
    }
}
