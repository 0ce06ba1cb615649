//! ES256 verification with ECDSA P-256
//!
//! Used to check issued tokens; the issuance path never calls it.

use crate::error::{JwtError, JwtResult};
use crate::types::{ALGORITHM, VerifiedToken};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use p256::ecdsa::{Signature, VerifyingKey, signature::Verifier};
use serde_json::Value;

/// Verify a compact JWS and return its decoded header and claims
///
/// A token whose `exp` is at or before `now` (Unix seconds) is rejected.
/// Tokens without `exp` are accepted.
///
/// # Errors
/// - [`JwtError::InvalidToken`] for a wrong segment count, bad Base64 or a non-ES256 header
/// - [`JwtError::InvalidSignature`] when the signature does not verify
/// - [`JwtError::TokenExpired`] for a past `exp`
pub fn es256_verify(verifying_key: &VerifyingKey, token: &str, now: i64) -> JwtResult<VerifiedToken> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(JwtError::invalid_token(&format!(
            "expected 3 segments, found {}",
            parts.len()
        )));
    }
    let (header_b64, claims_b64, signature_b64) = (parts[0], parts[1], parts[2]);

    let header = decode_segment(header_b64, "header")?;
    match header.get("alg").and_then(Value::as_str) {
        Some(ALGORITHM) => {}
        other => {
            return Err(JwtError::invalid_token(&format!(
                "unsupported algorithm {}",
                other.unwrap_or("<missing>")
            )));
        }
    }

    let signature_bytes = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| JwtError::InvalidSignature)?;
    let signature = Signature::from_slice(&signature_bytes).map_err(|_| JwtError::InvalidSignature)?;

    let mut signing_input = String::with_capacity(header_b64.len() + 1 + claims_b64.len());
    signing_input.push_str(header_b64);
    signing_input.push('.');
    signing_input.push_str(claims_b64);

    verifying_key
        .verify(signing_input.as_bytes(), &signature)
        .map_err(|_| JwtError::InvalidSignature)?;

    // Only decode claims after the signature checks out
    let claims = decode_segment(claims_b64, "claims")?;

    if let Some(exp) = claims.get("exp").and_then(Value::as_i64) {
        if now >= exp {
            return Err(JwtError::TokenExpired);
        }
    }

    Ok(VerifiedToken { header, claims })
}

fn decode_segment(segment: &str, name: &str) -> JwtResult<Value> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| JwtError::invalid_token(&format!("{name} is not Base64URL: {e}")))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| JwtError::invalid_token(&format!("{name} is not JSON: {e}")))
}
