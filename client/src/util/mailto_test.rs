use super::*;

#[test]
fn encode_component_keeps_unreserved() {
    assert_eq!(encode_component("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
}

#[test]
fn encode_component_escapes_space_and_reserved() {
    assert_eq!(encode_component("a b&c=d?"), "a%20b%26c%3Dd%3F");
    assert_eq!(encode_component("x,y"), "x%2Cy");
}

#[test]
fn encode_component_escapes_utf8_bytes() {
    assert_eq!(encode_component("é"), "%C3%A9");
}

#[test]
fn mailto_uri_places_fields() {
    assert_eq!(
        mailto_uri("me@example.com", "Hi there", "Line"),
        "mailto:me@example.com?subject=Hi%20there&body=Line"
    );
}

#[test]
fn resume_request_uri_uses_fixed_recipient_and_subject() {
    let uri = resume_request_uri();
    assert!(uri.starts_with("mailto:fullstackvet@gmail.com?subject=Resume%20Request%20from%20Your%20Portfolio&body="));
    assert!(uri.contains("earliest%20convenience."));
    assert!(!uri.contains(' '));
}
