//! PEM envelope handling
//!
//! Matching is substring based: any line containing `BEGIN` opens the body and
//! any line containing `END` closes it, whatever the label. Text outside the
//! markers is ignored.

use base64::alphabet;
use base64::engine::general_purpose::STANDARD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

const BEGIN_MARKER: &str = "BEGIN";
const END_MARKER: &str = "END";
const LINE_WIDTH: usize = 64;

// Standard alphabet; trailing `=` padding is optional on input
const BODY_DECODER: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Strip the PEM envelope and return the concatenated Base64 body
///
/// Body lines are trimmed and joined without separators. An input with no
/// body lines yields an empty string.
#[must_use]
pub fn strip(pem: &str) -> String {
    let mut body = String::with_capacity(pem.len());
    let mut in_body = false;
    for line in pem.split(|c| c == '\n' || c == '\r') {
        if line.contains(BEGIN_MARKER) {
            in_body = true;
            continue;
        }
        if line.contains(END_MARKER) {
            in_body = false;
            continue;
        }
        if in_body {
            body.push_str(line.trim());
        }
    }
    body
}

/// Strip the envelope and Base64-decode the body
///
/// # Errors
/// Returns the Base64 decoder error for bodies that are not valid standard
/// Base64. Missing padding is accepted.
pub fn decode(pem: &str) -> Result<Vec<u8>, base64::DecodeError> {
    BODY_DECODER.decode(strip(pem))
}

/// Wrap DER bytes in a PEM envelope with 64-column lines
#[must_use]
pub fn encode(label: &str, der: &[u8]) -> String {
    let body = STANDARD.encode(der);
    let mut pem = format!("-----BEGIN {label}-----\n");
    let mut rest = body.as_str();
    while !rest.is_empty() {
        let (line, tail) = rest.split_at(rest.len().min(LINE_WIDTH));
        pem.push_str(line);
        pem.push('\n');
        rest = tail;
    }
    pem.push_str(&format!("-----END {label}-----\n"));
    pem
}
