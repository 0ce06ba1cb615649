//! Identity provider token digest
//!
//! The consuming service compares `idp_at` against a 32-bit polynomial hash
//! (multiplier 31) over the UTF-16 code units of the token, rendered as the
//! lowercase hex of the unsigned value with no padding.

/// 32-bit polynomial hash over UTF-16 code units, wrapping on overflow
#[must_use]
pub fn legacy_hash(input: &str) -> i32 {
    input
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Lowercase hex rendering of [`legacy_hash`] as an unsigned value
#[must_use]
pub fn idp_token_digest(idp_access_token: &str) -> String {
    format!("{:x}", legacy_hash(idp_access_token) as u32)
}
