//! Key file helpers
//!
//! The only I/O in the crate. Everything downstream works on in-memory PEM.

use crate::error::{Error, Result};
use std::path::Path;
use tokensmith_key::public_key_der_base64;

/// Read a file to a string
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read.
pub fn read_pem(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read an EC P-256 public key PEM file and return its DER as standard Base64
///
/// This is the value expected by the enrollment token `x5c` header.
///
/// # Errors
/// - [`Error::PublicKeyNotFound`] when `path` does not exist
/// - [`Error::Io`] when it cannot be read
/// - [`Error::Key`] when it is not a P-256 public key
pub fn read_public_key_base64(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::PublicKeyNotFound(path.to_path_buf()));
    }
    let pem = read_pem(path)?;
    Ok(public_key_der_base64(&pem)?)
}

/// Read a `certificate.json` file and resolve it
///
/// # Errors
/// - [`Error::Io`] when the file cannot be read
/// - [`Error::Key`] when resolution fails
pub fn read_identity(path: impl AsRef<Path>) -> Result<tokensmith_key::ResolvedIdentity> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Resolving certificate {}", path.display());
    Ok(tokensmith_key::identity::resolve(&bytes)?)
}
