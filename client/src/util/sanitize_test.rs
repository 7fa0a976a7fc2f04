use super::*;

#[test]
fn plain_text_is_untouched() {
    let text = "Hi! I'd like to talk about a project: budget ~ $5k.";
    assert_eq!(strip_active_content(text), text);
}

#[test]
fn removes_script_block() {
    let out = strip_active_content("hello <script>alert(1)</script> world");
    assert_eq!(out, "hello  world");
    assert!(!out.to_ascii_lowercase().contains("script"));
}

#[test]
fn removes_script_block_case_insensitive_and_multiline() {
    let out = strip_active_content("a<SCRIPT type=\"x\">\nsteal()\n</Script>b");
    assert_eq!(out, "ab");
}

#[test]
fn removes_unclosed_script_tag() {
    let out = strip_active_content("x<script src=evil.js>y");
    assert_eq!(out, "xy");
}

#[test]
fn removes_double_quoted_event_handler() {
    let out = strip_active_content(r#"<img src="a.png" onerror="x">"#);
    assert!(!out.contains("onerror"));
    assert_eq!(out, r#"<img src="a.png" >"#);
}

#[test]
fn removes_single_quoted_event_handler_with_spacing() {
    let out = strip_active_content("<div onClick = 'run()'>");
    assert!(!out.to_ascii_lowercase().contains("onclick"));
}

#[test]
fn removes_javascript_scheme() {
    let out = strip_active_content("<a href=\"JavaScript:void(0)\">");
    assert!(!out.to_ascii_lowercase().contains("javascript"));
}

#[test]
fn nested_fragments_do_not_reassemble() {
    let out = strip_active_content("<scr<script>x</script>ipt>alert(1)</script>");
    assert!(!out.to_ascii_lowercase().contains("<script"));

    let out = strip_active_content("javajavascript:script:alert(1)");
    assert!(!out.to_ascii_lowercase().contains("javascript:"));
}

#[test]
fn stripping_is_idempotent() {
    let once = strip_active_content(r#"a<script>b</script>c onload="d" javascript:e"#);
    assert_eq!(strip_active_content(&once), once);
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(strip_active_content(""), "");
}
