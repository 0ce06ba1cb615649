//! Certificate file to signed token, through the unified entry point

use base64::{Engine, engine::general_purpose::STANDARD};
use p256::ecdsa::SigningKey;
use p256::pkcs8::{EncodePrivateKey, EncodePublicKey};
use rand::rngs::OsRng;
use std::fs;
use tempfile::TempDir;
use tokensmith::{EnvConfig, Error, SignedTokenRequest, TokenSmith, files, pem};

struct Fixture {
    _dir: TempDir,
    certificate: std::path::PathBuf,
    public_key: std::path::PathBuf,
    public_pem: String,
}

fn unambiguous(pem: &str) -> bool {
    pem.lines()
        .filter(|l| !l.starts_with("-----"))
        .all(|l| !l.contains("BEGIN") && !l.contains("END"))
}

fn fixture() -> Fixture {
    let (private_pem, public_pem) = loop {
        let signing = SigningKey::random(&mut OsRng);
        let private_pem = pem::encode("PRIVATE KEY", signing.to_pkcs8_der().unwrap().as_bytes());
        let public_pem = pem::encode(
            "PUBLIC KEY",
            signing.verifying_key().to_public_key_der().unwrap().as_bytes(),
        );
        if unambiguous(&private_pem) && unambiguous(&public_pem) {
            break (private_pem, public_pem);
        }
    };

    let dir = tempfile::tempdir().unwrap();
    let certificate = dir.path().join("certificate.json");
    let document = serde_json::json!({
        "client_id": "device-42",
        "public_key": public_pem,
        "private_key": private_pem,
        "createdAt": "2024-05-01T00:00:00Z",
    });
    fs::write(&certificate, document.to_string()).unwrap();

    let public_key = dir.path().join("public.pem");
    fs::write(&public_key, &public_pem).unwrap();

    Fixture {
        _dir: dir,
        certificate,
        public_key,
        public_pem,
    }
}

#[test]
fn certificate_file_to_verified_enrollment_token() {
    let fx = fixture();
    let identity = files::read_identity(&fx.certificate).unwrap();
    assert_eq!(identity.client_id(), "device-42");

    let x5c = files::read_public_key_base64(&fx.public_key).unwrap();
    assert_eq!(x5c, identity.public_key_base64().unwrap());

    let request =
        SignedTokenRequest::enrollment(identity.client_id(), "356938035643809").with_x5c(x5c.clone());
    let token = TokenSmith::jwt().with_identity(&identity).sign(&request).unwrap();

    let verified = TokenSmith::jwt()
        .with_public_key_pem(fx.public_pem.as_str())
        .verify(&token)
        .unwrap();
    assert_eq!(verified.header["kid"], "device-42");
    assert_eq!(verified.header["x5c"], serde_json::json!([x5c]));
    assert!(verified.claims.get("exp").is_none());

    // x5c carries DER, not PEM
    assert!(STANDARD.decode(&x5c).is_ok());
}

#[test]
fn missing_public_key_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.pem");
    let err = files::read_public_key_base64(&path).unwrap_err();
    assert!(matches!(err, Error::PublicKeyNotFound(_)));
    assert_eq!(
        err.to_string(),
        format!("Public key file not found: {}", path.display())
    );
}

#[test]
fn public_key_file_with_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("public.pem");
    fs::write(&path, "-----BEGIN PUBLIC KEY-----\n@@@\n-----END PUBLIC KEY-----\n").unwrap();
    let err = files::read_public_key_base64(&path).unwrap_err();
    assert!(err.to_string().starts_with("Failed to load public key"));
}

#[test]
fn identity_errors_surface_through_facade() {
    let err = TokenSmith::identity(br#"{"privateKey":"x"}"#).unwrap_err();
    assert!(matches!(err, Error::Key(_)));
    assert!(err.to_string().contains("client identifier"));
}

#[test]
fn lifetimes_from_dotenv() {
    let fx = fixture();
    let identity = files::read_identity(&fx.certificate).unwrap();
    let env = EnvConfig::from_dotenv_str("TOKENSMITH_SESSION_TTL_SECS=90\n").detached();

    let token = TokenSmith::jwt_with_env(&env)
        .unwrap()
        .with_identity(&identity)
        .sign(&SignedTokenRequest::session("st"))
        .unwrap();
    let verified = TokenSmith::jwt()
        .with_public_key_pem(fx.public_pem.as_str())
        .verify(token)
        .unwrap();
    let iat = verified.claim_i64("iat").unwrap();
    assert_eq!(verified.claim_i64("exp"), Some(iat + 90));
}

#[test]
fn non_positive_lifetime_is_rejected() {
    let env = EnvConfig::from_dotenv_str("TOKENSMITH_ACCESS_TTL_SECS=0\n").detached();
    let err = TokenSmith::jwt_with_env(&env).err().unwrap();
    assert!(matches!(err, Error::Jwt(_)));
}

#[test]
fn cipher_rejects_blank_key() {
    let err = TokenSmith::cipher()
        .with_public_key_pem("  ")
        .encrypt(b"secret")
        .unwrap_err();
    assert!(matches!(err, tokensmith::CipherError::InvalidArgument(_)));
    assert_eq!(tokensmith::max_plaintext_len(256), 245);
}
