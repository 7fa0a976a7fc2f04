//! Active-content stripping for free-text form input.
//!
//! Removes script blocks, inline event-handler attributes and
//! `javascript:` references. Patterns are reapplied until the value stops
//! changing so fragments split around a removed match cannot reassemble.

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod sanitize_test;

use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script\s*>").expect("valid script block pattern"));
static SCRIPT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?script[^>]*>").expect("valid script tag pattern"));
static HANDLER_DOUBLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)on\w+\s*=\s*"[^"]*""#).expect("valid handler pattern"));
static HANDLER_SINGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)on\w+\s*=\s*'[^']*'").expect("valid handler pattern"));
static JS_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript\s*:").expect("valid scheme pattern"));

/// Hard stop for pathological nesting; each pass strictly shortens the input.
const MAX_PASSES: usize = 16;

/// Strip active content from one field value.
#[must_use]
pub fn strip_active_content(input: &str) -> String {
    let mut current = input.to_owned();
    for _ in 0..MAX_PASSES {
        let next = strip_once(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn strip_once(input: &str) -> String {
    let out = SCRIPT_BLOCK.replace_all(input, "");
    let out = SCRIPT_TAG.replace_all(&out, "");
    let out = HANDLER_DOUBLE.replace_all(&out, "");
    let out = HANDLER_SINGLE.replace_all(&out, "");
    JS_SCHEME.replace_all(&out, "").into_owned()
}
