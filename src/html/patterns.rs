//! Cached regex patterns for text wrapping.
//!
//! Uses LazyLock to compile patterns once on first use.

use regex_lite::Regex;
use std::sync::LazyLock;

/// Matches a run of two or more line breaks separating paragraphs
pub static PARAGRAPH_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\r\n|\n|\r){2,}").unwrap());

/// Matches a run of non-whitespace characters
pub static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").unwrap());

/// Matches a full opening tag such as `<p class="lead">`, capturing the tag name
pub static OPEN_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<([\w-]+)(?:\s.+)?>$").unwrap());

/// Attributes that hold or reference an element ID
pub const ID_ATTRIBUTES: [&str; 4] = ["id", "for", "aria-labelledby", "aria-describedby"];

/// Build the pattern matching `name="value"` or `name='value'` for the given names.
///
/// Group 1 is the name, group 2 a double-quoted value, group 3 a single-quoted value.
/// Values never span a line break.
pub fn id_attribute_pattern<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let alternatives: Vec<String> = names.into_iter().map(regex_lite::escape).collect();
    format!(
        r#"(?i)\b({})=(?:"([^"\r\n]*)"|'([^'\r\n]*)')"#,
        alternatives.join("|")
    )
}
