//! Escaping tests through the public API.

use markup_builder::css::escape_string;
use markup_builder::html::{JsonOptions, escape, escape_js_value, escape_json, unescape};
use proptest::prelude::*;
use serde::Serialize;

#[derive(Serialize)]
struct Config<'a> {
    title: &'a str,
    tags: Vec<&'a str>,
}

#[test]
fn test_inline_script_payload() {
    let config = Config {
        title: "</script><script>alert(1)</script>",
        tags: vec!["a"],
    };
    let js = escape_js_value(&config, JsonOptions::default()).unwrap();
    assert!(!js.contains('<'));
    assert!(!js.contains('>'));
    assert!(js.starts_with(r#"{"title":"#));
}

#[test]
fn test_json_attribute_payload() {
    let json = escape_json(&["a'b", "c"], JsonOptions::default()).unwrap();
    assert_eq!(json, "[&quot;a&apos;b&quot;,&quot;c&quot;]");
    assert_eq!(unescape(&json), r#"["a'b","c"]"#);
}

#[test]
fn test_pretty_json() {
    let json = escape_js_value(&[1, 2], JsonOptions::pretty()).unwrap();
    assert_eq!(json, "[\n    1,\n    2\n]");
}

proptest! {
    #[test]
    fn escaped_html_has_no_markup(s in "\\PC*") {
        let escaped = escape(&s);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
    }

    #[test]
    fn escaped_css_string_is_closed(s in "\\PC*") {
        let escaped = escape_string(&s);
        let inner = &escaped[1..escaped.len() - 1];
        // Every quote inside the literal is preceded by an odd run of backslashes.
        let mut backslashes = 0usize;
        for c in inner.chars() {
            if c == '\'' {
                prop_assert!(backslashes % 2 == 1);
            }
            backslashes = if c == '\\' { backslashes + 1 } else { 0 };
        }
        prop_assert!(backslashes % 2 == 0);
    }
}
