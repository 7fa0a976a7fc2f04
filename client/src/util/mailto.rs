//! `mailto:` links for the resume-request action.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

use crate::data::contact::{EMAIL_ADDRESS, RESUME_REQUEST_BODY, RESUME_REQUEST_SUBJECT};

/// Build a `mailto:` URI with encoded subject and body.
#[must_use]
pub fn mailto_uri(recipient: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{recipient}?subject={}&body={}",
        encode_component(subject),
        encode_component(body)
    )
}

/// Fixed resume-request link handed to the platform mail handler.
#[must_use]
pub fn resume_request_uri() -> String {
    mailto_uri(EMAIL_ADDRESS, RESUME_REQUEST_SUBJECT, RESUME_REQUEST_BODY)
}

/// Percent-encode with `encodeURIComponent` rules.
#[must_use]
pub fn encode_component(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}
