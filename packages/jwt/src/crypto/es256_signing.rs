//! ES256 signing with ECDSA P-256

use crate::error::{JwtError, JwtResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use p256::ecdsa::{Signature, SigningKey, signature::Signer};
use serde::Serialize;

/// Sign `header` and `claims` into a compact JWS
///
/// The signature segment is the 64-byte `r || s` encoding required by JWS,
/// not ASN.1 DER.
///
/// # Errors
/// Returns [`JwtError::Serialization`] if either part fails to serialize.
pub fn es256_sign<H, C>(signing_key: &SigningKey, header: &H, claims: &C) -> JwtResult<String>
where
    H: Serialize,
    C: Serialize,
{
    let header_json =
        serde_json::to_vec(header).map_err(|e| JwtError::serialization(&e.to_string()))?;
    let header_b64 = URL_SAFE_NO_PAD.encode(&header_json);

    let claims_json =
        serde_json::to_vec(claims).map_err(|e| JwtError::serialization(&e.to_string()))?;
    let claims_b64 = URL_SAFE_NO_PAD.encode(&claims_json);

    let mut signing_input = String::with_capacity(header_b64.len() + 1 + claims_b64.len());
    signing_input.push_str(&header_b64);
    signing_input.push('.');
    signing_input.push_str(&claims_b64);

    let signature: Signature = signing_key.sign(signing_input.as_bytes());
    let signature_b64 = URL_SAFE_NO_PAD.encode(signature.to_bytes());

    let mut jwt = String::with_capacity(signing_input.len() + 1 + signature_b64.len());
    jwt.push_str(&signing_input);
    jwt.push('.');
    jwt.push_str(&signature_b64);

    Ok(jwt)
}
