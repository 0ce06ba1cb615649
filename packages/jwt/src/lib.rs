//! ES256 token issuance
//!
//! Signs four token flavours with a P-256 key:
//! - client identity tokens (10 year lifetime)
//! - session and access delegation tokens (1 hour)
//! - device enrollment assertions (no expiry, optional `x5c` header)
//!
//! ```rust,ignore
//! use tokensmith_jwt::{Jwt, SignedTokenRequest};
//!
//! let token = Jwt::es256()
//!     .with_private_key_pem(pem)
//!     .sign(&SignedTokenRequest::session(session_token))?;
//! ```

pub mod api;
pub mod claims;
pub mod config;
pub(crate) mod crypto;
pub mod digest;
mod error;
pub mod issuer;
pub mod request;
mod types;

pub use api::{Es256Builder, Es256WithPrivateKey, Es256WithPublicKey, Jwt};
pub use config::SigningConfig;
pub use crypto::{es256_sign, es256_verify};
pub use error::*;
pub use issuer::TokenIssuer;
pub use request::SignedTokenRequest;
pub use types::*;
