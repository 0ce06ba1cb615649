//! JWT header and claim set wire types

use serde::{Deserialize, Serialize};

/// Signing algorithm carried in every header
pub const ALGORITHM: &str = "ES256";
/// Token type carried in every header
pub const TOKEN_TYPE: &str = "JWT";

/// JWT header
///
/// Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtHeader {
    /// Always `ES256`
    pub alg: String,
    /// Always `JWT`
    pub typ: String,
    /// Key id, enrollment tokens only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    /// Base64 DER public key chain, enrollment tokens only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x5c: Option<Vec<String>>,
}

impl JwtHeader {
    /// `alg=ES256`, `typ=JWT` and nothing else
    #[must_use]
    pub fn es256() -> Self {
        Self {
            alg: ALGORITHM.to_string(),
            typ: TOKEN_TYPE.to_string(),
            kid: None,
            x5c: None,
        }
    }

    /// Set `kid`
    #[must_use]
    pub fn with_key_id(mut self, kid: impl Into<String>) -> Self {
        self.kid = Some(kid.into());
        self
    }

    /// Attach a single-element certificate chain
    #[must_use]
    pub fn with_x5c(mut self, public_key_b64: impl Into<String>) -> Self {
        self.x5c = Some(vec![public_key_b64.into()]);
        self
    }
}

impl Default for JwtHeader {
    fn default() -> Self {
        Self::es256()
    }
}

/// Flat claim set shared by all token variants
///
/// Each variant fills a fixed subset; unset claims are omitted on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject
    pub sub: String,
    /// Audience, always a single-element array
    pub aud: Vec<String>,
    /// Creation time, client identity tokens only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdt: Option<i64>,
    /// Granted scope
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Hex digest of the identity provider access token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_at: Option<String>,
    /// Session token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub st: Option<String>,
    /// Raw access token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,
    /// Device IMEI, enrollment tokens only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imei: Option<String>,
    /// Issued at, Unix seconds
    pub iat: i64,
    /// Expiry, Unix seconds; absent on enrollment tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// Decoded header and claims of a verified token
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedToken {
    /// Decoded header object
    pub header: serde_json::Value,
    /// Decoded claims object
    pub claims: serde_json::Value,
}

impl VerifiedToken {
    /// String claim by name
    #[must_use]
    pub fn claim_str(&self, name: &str) -> Option<&str> {
        self.claims.get(name).and_then(serde_json::Value::as_str)
    }

    /// Integer claim by name
    #[must_use]
    pub fn claim_i64(&self, name: &str) -> Option<i64> {
        self.claims.get(name).and_then(serde_json::Value::as_i64)
    }
}
