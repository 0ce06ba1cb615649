//! Token requests
//!
//! One closed enum replaces a method per token flavour. Each variant maps to a
//! fixed header and claim layout in [`crate::claims`].

use crate::error::{JwtError, JwtResult};

/// What to sign
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignedTokenRequest {
    /// Long-lived machine identity token
    ClientIdentity {
        /// Client identifier
        subject: String,
        /// Raw identity provider token; only its digest is embedded
        idp_access_token: Option<String>,
    },
    /// Short-lived session token carrier
    Session {
        /// Session token to carry in `st`
        session_token: String,
    },
    /// Short-lived access delegation token carrier
    AccessDelegation {
        /// Raw access token to carry in `at`
        access_token: String,
    },
    /// Device enrollment assertion; has no expiry
    Enrollment {
        /// Client identifier, also used as `kid`
        subject: String,
        /// Device IMEI carried in `imei`
        device_imei: String,
        /// Standard Base64 SubjectPublicKeyInfo DER for the `x5c` header
        x5c_public_key_b64: Option<String>,
    },
}

impl SignedTokenRequest {
    /// Client identity request without an identity provider token
    #[must_use]
    pub fn client_identity(subject: impl Into<String>) -> Self {
        Self::ClientIdentity {
            subject: subject.into(),
            idp_access_token: None,
        }
    }

    /// Client identity request embedding the digest of `idp_access_token`
    #[must_use]
    pub fn client_identity_with_idp(
        subject: impl Into<String>,
        idp_access_token: impl Into<String>,
    ) -> Self {
        Self::ClientIdentity {
            subject: subject.into(),
            idp_access_token: Some(idp_access_token.into()),
        }
    }

    /// Session token request
    #[must_use]
    pub fn session(session_token: impl Into<String>) -> Self {
        Self::Session {
            session_token: session_token.into(),
        }
    }

    /// Access delegation request
    #[must_use]
    pub fn access(access_token: impl Into<String>) -> Self {
        Self::AccessDelegation {
            access_token: access_token.into(),
        }
    }

    /// Enrollment request without `x5c`
    #[must_use]
    pub fn enrollment(subject: impl Into<String>, device_imei: impl Into<String>) -> Self {
        Self::Enrollment {
            subject: subject.into(),
            device_imei: device_imei.into(),
            x5c_public_key_b64: None,
        }
    }

    /// Attach an `x5c` value to an enrollment request; other variants are unchanged
    #[must_use]
    pub fn with_x5c(self, public_key_b64: impl Into<String>) -> Self {
        match self {
            Self::Enrollment {
                subject,
                device_imei,
                ..
            } => Self::Enrollment {
                subject,
                device_imei,
                x5c_public_key_b64: Some(public_key_b64.into()),
            },
            other => other,
        }
    }

    /// Short variant name used in logs
    #[must_use]
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::ClientIdentity { .. } => "client_identity",
            Self::Session { .. } => "session",
            Self::AccessDelegation { .. } => "access",
            Self::Enrollment { .. } => "enrollment",
        }
    }

    /// Error prefix reported when signing this variant fails
    #[must_use]
    pub fn failure_context(&self) -> &'static str {
        match self {
            Self::Enrollment { .. } => "Failed to create JWT",
            _ => "Failed to generate JWT",
        }
    }

    /// Reject blank required inputs
    ///
    /// # Errors
    /// Returns [`JwtError::InvalidArgument`] naming the blank field.
    pub fn validate(&self) -> JwtResult<()> {
        match self {
            Self::ClientIdentity { subject, .. } => require("client identifier", subject),
            Self::Session { session_token } => require("session token", session_token),
            Self::AccessDelegation { access_token } => require("access token", access_token),
            Self::Enrollment {
                subject,
                device_imei,
                ..
            } => {
                require("client identifier", subject)?;
                require("device IMEI", device_imei)
            }
        }
    }
}

fn require(field: &str, value: &str) -> JwtResult<()> {
    if value.trim().is_empty() {
        return Err(JwtError::invalid_argument(format!(
            "{field} must not be blank"
        )));
    }
    Ok(())
}
