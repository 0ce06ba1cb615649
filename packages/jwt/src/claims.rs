//! Per-variant header and claim construction

use crate::config::SigningConfig;
use crate::digest::idp_token_digest;
use crate::request::SignedTokenRequest;
use crate::types::{JwtHeader, TokenClaims};

/// Audience of client identity, session and access tokens
pub const SERVICE_AUDIENCE: &str = "PTSDIRECT.ORG";
/// Audience of enrollment tokens
pub const ENROLLMENT_AUDIENCE: &str = "kpe_v2";
/// Subject of session tokens
pub const SESSION_SUBJECT: &str = "session";
/// Subject of access delegation tokens
pub const ACCESS_SUBJECT: &str = "access";
/// Scope granted to client identity tokens
pub const CLIENT_SCOPE: &str = "all";

/// Build the header and claim set for `request` issued at `now` (Unix seconds)
#[must_use]
pub fn build(
    request: &SignedTokenRequest,
    config: &SigningConfig,
    now: i64,
) -> (JwtHeader, TokenClaims) {
    match request {
        SignedTokenRequest::ClientIdentity {
            subject,
            idp_access_token,
        } => (
            JwtHeader::es256(),
            TokenClaims {
                sub: subject.clone(),
                aud: vec![SERVICE_AUDIENCE.to_string()],
                cdt: Some(now),
                scope: Some(CLIENT_SCOPE.to_string()),
                idp_at: idp_access_token.as_deref().map(idp_token_digest),
                iat: now,
                exp: Some(now + config.client_identity_ttl().num_seconds()),
                ..TokenClaims::default()
            },
        ),
        SignedTokenRequest::Session { session_token } => (
            JwtHeader::es256(),
            TokenClaims {
                sub: SESSION_SUBJECT.to_string(),
                aud: vec![SERVICE_AUDIENCE.to_string()],
                st: Some(session_token.clone()),
                iat: now,
                exp: Some(now + config.session_ttl().num_seconds()),
                ..TokenClaims::default()
            },
        ),
        SignedTokenRequest::AccessDelegation { access_token } => (
            JwtHeader::es256(),
            TokenClaims {
                sub: ACCESS_SUBJECT.to_string(),
                aud: vec![SERVICE_AUDIENCE.to_string()],
                at: Some(access_token.clone()),
                iat: now,
                exp: Some(now + config.access_ttl().num_seconds()),
                ..TokenClaims::default()
            },
        ),
        SignedTokenRequest::Enrollment {
            subject,
            device_imei,
            x5c_public_key_b64,
        } => {
            let mut header = JwtHeader::es256().with_key_id(subject.clone());
            if let Some(b64) = x5c_public_key_b64.as_deref().filter(|b| !b.trim().is_empty()) {
                header = header.with_x5c(b64);
            }
            (
                header,
                TokenClaims {
                    sub: subject.clone(),
                    aud: vec![ENROLLMENT_AUDIENCE.to_string()],
                    imei: Some(device_imei.clone()),
                    iat: now,
                    exp: None,
                    ..TokenClaims::default()
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    const NOW: i64 = 1_700_000_000;

    fn wire(request: &SignedTokenRequest) -> (Value, Value) {
        let (header, claims) = build(request, &SigningConfig::default(), NOW);
        (
            serde_json::to_value(header).unwrap(),
            serde_json::to_value(claims).unwrap(),
        )
    }

    #[test]
    fn client_identity_claims() {
        let (header, claims) = wire(&SignedTokenRequest::client_identity("client-1"));
        assert_eq!(header, json!({"alg": "ES256", "typ": "JWT"}));
        assert_eq!(
            claims,
            json!({
                "sub": "client-1",
                "aud": ["PTSDIRECT.ORG"],
                "cdt": NOW,
                "scope": "all",
                "iat": NOW,
                "exp": NOW + 315_532_800,
            })
        );
    }

    #[test]
    fn client_identity_with_idp_digest() {
        let (_, claims) = wire(&SignedTokenRequest::client_identity_with_idp("c", "abc"));
        assert_eq!(claims["idp_at"], "17862");
    }

    #[test]
    fn session_claims() {
        let (header, claims) = wire(&SignedTokenRequest::session("sess-token"));
        assert_eq!(header, json!({"alg": "ES256", "typ": "JWT"}));
        assert_eq!(
            claims,
            json!({
                "sub": "session",
                "aud": ["PTSDIRECT.ORG"],
                "st": "sess-token",
                "iat": NOW,
                "exp": NOW + 3600,
            })
        );
    }

    #[test]
    fn access_claims() {
        let (_, claims) = wire(&SignedTokenRequest::access("raw"));
        assert_eq!(
            claims,
            json!({
                "sub": "access",
                "aud": ["PTSDIRECT.ORG"],
                "at": "raw",
                "iat": NOW,
                "exp": NOW + 3600,
            })
        );
    }

    #[test]
    fn enrollment_without_x5c() {
        let (header, claims) = wire(&SignedTokenRequest::enrollment("client-1", "356938035643809"));
        assert_eq!(header, json!({"alg": "ES256", "typ": "JWT", "kid": "client-1"}));
        assert_eq!(
            claims,
            json!({
                "sub": "client-1",
                "aud": ["kpe_v2"],
                "imei": "356938035643809",
                "iat": NOW,
            })
        );
    }

    #[test]
    fn enrollment_with_x5c() {
        let request = SignedTokenRequest::enrollment("client-1", "1").with_x5c("MFkw");
        let (header, _) = wire(&request);
        assert_eq!(header["x5c"], json!(["MFkw"]));
    }

    #[test]
    fn blank_x5c_is_omitted() {
        let request = SignedTokenRequest::enrollment("client-1", "1").with_x5c("  ");
        let (header, _) = wire(&request);
        assert!(header.get("x5c").is_none());
    }

    #[test]
    fn header_field_order() {
        let request = SignedTokenRequest::enrollment("k", "1").with_x5c("X");
        let (header, _) = build(&request, &SigningConfig::default(), NOW);
        assert_eq!(
            serde_json::to_string(&header).unwrap(),
            r#"{"alg":"ES256","typ":"JWT","kid":"k","x5c":["X"]}"#
        );
    }
}
